pub mod dashboard;
pub mod metric;
pub mod reports;

pub use dashboard::dashboard;
pub use metric::metric;
pub use reports::{report, reports};
