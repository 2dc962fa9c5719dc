use super::size_format::format_size;
use crate::domain::ContainerRecord;
use anyhow::{Context, Result};

pub const NO_CONTAINERS: &str = "No containers found.";
const RULE_WIDTH: usize = 90;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub rw: u64,
    pub root: u64,
}

impl Totals {
    pub fn of(records: &[ContainerRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            rw: acc.rw.saturating_add(r.size.rw_size),
            root: acc.root.saturating_add(r.size.root_fs_size),
        })
    }

    pub fn combined(&self) -> u64 {
        self.rw.saturating_add(self.root)
    }
}

/// Aligned table with one row per record followed by the aggregate block.
pub fn render_table(records: &[ContainerRecord]) -> String {
    let mut out = String::new();

    push_row(&mut out, ["NAME", "IMAGE", "RW SIZE", "ROOT SIZE", "TOTAL SIZE"]);
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for record in records {
        let size = &record.size;
        push_row(
            &mut out,
            [
                record.display_name(),
                &record.image,
                &format_size(size.rw_size),
                &format_size(size.root_fs_size),
                &format_size(size.total()),
            ],
        );
    }

    let totals = Totals::of(records);
    out.push_str("\nTOTAL:\n");
    out.push_str(&format!("Read/Write: {}\n", format_size(totals.rw)));
    out.push_str(&format!("Root FS:    {}\n", format_size(totals.root)));
    out.push_str(&format!("Combined:   {}\n", format_size(totals.combined())));

    out
}

/// Records as an indented JSON array, in their current order.
pub fn render_json(records: &[ContainerRecord]) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(records).context("serializing container listing")?;
    out.push('\n');
    Ok(out)
}

fn push_row(out: &mut String, [name, image, rw, root, total]: [&str; 5]) {
    out.push_str(&format!(
        "{name:<20} {image:<30} {rw:<12} {root:<12} {total}\n"
    ));
}
