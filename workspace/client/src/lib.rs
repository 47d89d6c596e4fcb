//! Data access for the analytics console: the API client and its typed
//! fetchers, a keyed query cache with request deduplication, fetch state
//! tracking and the view models pages are built from.

pub mod api_client;
pub mod error;
pub mod mock;
pub mod queries;
pub mod query;
pub mod settings;
pub mod transport;
pub mod views;

pub use api_client::metrics::MetricsQuery;
pub use api_client::ApiClient;
pub use error::{ApiError, Result};
pub use queries::{CachedData, QueryClient, QueryData};
pub use query::{CachedEntry, FetchState, MetricResource, QueryCache, QueryKey, QuerySlot};
pub use settings::Settings;
pub use transport::{ApiRequest, ApiResponse, Transport};
