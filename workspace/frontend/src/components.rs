pub mod charts;
pub mod layout;
pub mod metrics;
pub mod reports;
