use serde::{Deserialize, Deserializer, Serialize};

pub const UNNAMED: &str = "<unnamed>";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SizeInfo {
    #[serde(alias = "rootFsSize", default, deserialize_with = "null_as_default")]
    pub root_fs_size: u64,
    #[serde(alias = "rwSize", default, deserialize_with = "null_as_default")]
    pub rw_size: u64,
}

impl SizeInfo {
    pub fn new(root_fs_size: u64, rw_size: u64) -> Self {
        Self {
            root_fs_size,
            rw_size,
        }
    }

    pub fn total(&self) -> u64 {
        self.root_fs_size.saturating_add(self.rw_size)
    }
}

/// One container as reported by `<runtime> ps --size --format json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub names: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: SizeInfo,
}

impl ContainerRecord {
    pub fn new(id: &str, names: &[&str], image: &str, size: SizeInfo) -> Self {
        Self {
            id: id.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            image: image.to_string(),
            status: None,
            size,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// First assigned name, or [`UNNAMED`] when the runtime reported none.
    pub fn display_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(UNNAMED)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
