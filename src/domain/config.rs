use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by display name
    #[default]
    Name,
    /// Descending by root filesystem + read/write size
    TotalSize,
    /// Descending by read/write layer size
    RwSize,
}

impl SortKey {
    /// Parses a `--sort` value, returning `None` for anything unrecognized.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "size" => Some(Self::TotalSize),
            "rwsize" => Some(Self::RwSize),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::TotalSize => write!(f, "size"),
            Self::RwSize => write!(f, "rwsize"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
}

/// Options resolved from the command line, passed down the pipeline as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub include_all: bool,
    pub sort_key: SortKey,
    pub output: OutputMode,
}
