pub mod dashboard;
pub mod metric_detail;
pub mod not_found;
pub mod report_detail;
pub mod reports;
