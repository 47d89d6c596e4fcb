pub mod cache;
pub mod key;
pub mod state;

pub use cache::{CachedEntry, QueryCache};
pub use key::{MetricResource, QueryKey};
pub use state::{FetchState, QuerySlot};
