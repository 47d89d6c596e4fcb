use client::{
    CachedData, FetchState, MetricsQuery, QueryClient, QueryData, QueryKey, QuerySlot, Result,
};
use common::{
    MetricDataPoint, MetricDetail, MetricForecastPoint, MetricOverview, PaginatedResponse,
    ReportDetail, ReportSummary,
};
use std::rc::Rc;
use yew::prelude::*;

/// State of one query plus a callback that invalidates and reloads it.
pub struct QueryHandle<T> {
    pub state: FetchState<Rc<T>>,
    pub refetch: Callback<()>,
}

/// Fetch slot held in a reducer so that late responses can be checked
/// against the current key.
#[derive(PartialEq)]
struct SlotState<T: PartialEq>(QuerySlot<Rc<T>>);

impl<T: PartialEq> Default for SlotState<T> {
    fn default() -> Self {
        Self(QuerySlot::default())
    }
}

enum SlotAction<T> {
    Begin(QueryKey),
    Seed(QueryKey, Rc<T>),
    Resolve(QueryKey, Result<Rc<T>>),
    Disable,
}

impl<T: PartialEq> Reducible for SlotState<T> {
    type Action = SlotAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slot = self.0.clone();
        match action {
            SlotAction::Begin(key) => slot.begin(key),
            SlotAction::Seed(key, data) => slot.seed(key, data),
            SlotAction::Resolve(key, result) => {
                if !slot.resolve(&key, result) {
                    return self;
                }
            }
            SlotAction::Disable => slot.disable(),
        }
        Rc::new(Self(slot))
    }
}

#[hook]
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient context not found")
}

/// Runs the query for `key` through the shared cache.
///
/// `None` keeps the query idle (`NotStarted`). A key change starts a new
/// load; a response for a key that is no longer current is dropped.
#[hook]
pub fn use_query<T>(key: Option<QueryKey>) -> QueryHandle<T>
where
    T: QueryData + PartialEq + 'static,
{
    let client = use_query_client();
    let slot = use_reducer(SlotState::<T>::default);
    let reload = use_state(|| 0u32);

    {
        let client = client.clone();
        let slot = slot.clone();
        use_effect_with((key.clone(), *reload), move |(key, _)| {
            match key.clone() {
                None => slot.dispatch(SlotAction::Disable),
                Some(key) => match client.cached::<T>(&key) {
                    Some(data) => {
                        log::trace!("Serving {} from cache", key);
                        slot.dispatch(SlotAction::Seed(key, data));
                    }
                    None => {
                        slot.dispatch(SlotAction::Begin(key.clone()));
                        wasm_bindgen_futures::spawn_local(async move {
                            let result = client.query::<T>(key.clone()).await;
                            slot.dispatch(SlotAction::Resolve(key, result));
                        });
                    }
                },
            }
            || ()
        });
    }

    let refetch = {
        let key = key.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            if let Some(key) = &key {
                log::debug!("Refetching {}", key);
                client.invalidate(key);
                reload.set(*reload + 1);
            }
        })
    };

    QueryHandle {
        state: slot.0.state().clone(),
        refetch,
    }
}

#[hook]
pub fn use_metrics_overview(query: MetricsQuery) -> QueryHandle<PaginatedResponse<MetricOverview>> {
    use_query(Some(QueryKey::metrics(query)))
}

/// Idle while `metric_id` is blank.
#[hook]
pub fn use_metric_detail(metric_id: String) -> QueryHandle<MetricDetail> {
    use_query(QueryKey::metric_detail(&metric_id))
}

#[hook]
pub fn use_metric_series(metric_id: String) -> QueryHandle<Vec<MetricDataPoint>> {
    use_query(QueryKey::metric_series(&metric_id))
}

#[hook]
pub fn use_metric_forecast(metric_id: String) -> QueryHandle<Vec<MetricForecastPoint>> {
    use_query(QueryKey::metric_forecast(&metric_id))
}

#[hook]
pub fn use_reports() -> QueryHandle<PaginatedResponse<ReportSummary>> {
    use_query(Some(QueryKey::reports()))
}

#[hook]
pub fn use_report_detail(report_id: String) -> QueryHandle<ReportDetail> {
    use_query(QueryKey::report(&report_id))
}

/// Prefetches every sub-resource of a metric, e.g. on card hover.
pub fn prefetch_metric(client: &QueryClient, metric_id: &str) {
    let keys = [
        QueryKey::metric_detail(metric_id),
        QueryKey::metric_series(metric_id),
        QueryKey::metric_forecast(metric_id),
    ];
    for key in keys.into_iter().flatten() {
        let client = client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result: Result<CachedData> = client.fetch(key).await;
            if let Err(e) = result {
                log::debug!("Prefetch failed: {}", e);
            }
        });
    }
}
