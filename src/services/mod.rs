mod ordering;
mod render;
mod report_service;
mod size_format;

pub use ordering::reorder;
pub use render::{NO_CONTAINERS, Totals, render_json, render_table};
pub use report_service::ReportService;
pub use size_format::format_size;
