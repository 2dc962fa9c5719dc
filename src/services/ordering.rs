use crate::domain::{ContainerRecord, SortKey};
use std::cmp::Reverse;

/// Reorders `records` in place. Only the order changes, never the length.
pub fn reorder(records: &mut [ContainerRecord], key: SortKey) {
    match key {
        SortKey::Name => records.sort_by(|a, b| a.display_name().cmp(b.display_name())),
        SortKey::TotalSize => records.sort_by_key(|r| Reverse(r.size.total())),
        SortKey::RwSize => records.sort_by_key(|r| Reverse(r.size.rw_size)),
    }
}
