use cached::{Cached, SizedCache};
use chrono::{DateTime, TimeDelta, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use super::key::QueryKey;
use crate::error::Result;
use crate::settings::Settings;

/// A resolved query result and when it was fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedEntry<V> {
    pub value: V,
    pub fetched_at: DateTime<Utc>,
}

impl<V> CachedEntry<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.fetched_at
    }

    /// A zero `stale_after` makes every entry stale.
    pub fn is_stale(&self, stale_after: TimeDelta, now: DateTime<Utc>) -> bool {
        self.age(now) >= stale_after
    }
}

type SharedLoad<V> = Shared<LocalBoxFuture<'static, Result<V>>>;

struct InFlight<V> {
    generation: u64,
    future: SharedLoad<V>,
}

struct CacheState<V> {
    entries: SizedCache<QueryKey, CachedEntry<V>>,
    in_flight: HashMap<QueryKey, InFlight<V>>,
    next_generation: u64,
}

/// Keyed query cache with deduplication of concurrent loads.
///
/// Contract:
/// - a fresh entry is returned without calling the loader
/// - concurrent `fetch` calls for the same key share one loader invocation
///   and all receive its result (value or error)
/// - only successful results are stored; errors are never cached
/// - `invalidate` drops the entry and detaches any in-flight load, whose
///   result then reaches its awaiters but is not stored
///
/// The cache is single-threaded (`Rc<RefCell<_>>`); no borrow is held across
/// an await point. Least recently used entries are evicted once `capacity`
/// is reached.
pub struct QueryCache<V> {
    state: Rc<RefCell<CacheState<V>>>,
    stale_after: TimeDelta,
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            stale_after: self.stale_after,
        }
    }
}

impl<V> PartialEq for QueryCache<V> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<V: Clone + 'static> QueryCache<V> {
    pub fn new(capacity: usize, stale_after: TimeDelta) -> Self {
        Self {
            state: Rc::new(RefCell::new(CacheState {
                entries: SizedCache::with_size(capacity.max(1)),
                in_flight: HashMap::new(),
                next_generation: 0,
            })),
            stale_after,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.cache_capacity, settings.stale_after())
    }

    pub fn stale_after(&self) -> TimeDelta {
        self.stale_after
    }

    /// Cached entry for `key`, fresh or stale. Does not trigger a load.
    pub fn get(&self, key: &QueryKey) -> Option<CachedEntry<V>> {
        self.state.borrow_mut().entries.cache_get(key).cloned()
    }

    /// Cached value for `key` only if it is still fresh.
    pub fn get_fresh(&self, key: &QueryKey) -> Option<V> {
        let now = Utc::now();
        self.get(key)
            .filter(|entry| !entry.is_stale(self.stale_after, now))
            .map(|entry| entry.value)
    }

    /// Returns the fresh cached value, joins a pending load for the same
    /// key, or starts a new load with `loader`.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, loader: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + 'static,
    {
        let pending = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            if let Some(entry) = state.entries.cache_get(&key) {
                if !entry.is_stale(self.stale_after, Utc::now()) {
                    log::trace!("Cache hit for {}", key);
                    return Ok(entry.value.clone());
                }
                log::debug!("Cached entry for {} is stale", key);
            }
            state
                .in_flight
                .get(&key)
                .map(|in_flight| (in_flight.generation, in_flight.future.clone()))
        };

        let (generation, future) = match pending {
            Some(pending) => {
                log::debug!("Joining in-flight request for {}", key);
                pending
            }
            None => {
                log::debug!("Cache miss for {}, loading", key);
                // loader runs outside the borrow
                let future = loader().boxed_local().shared();
                let mut state = self.state.borrow_mut();
                let generation = state.next_generation;
                state.next_generation += 1;
                state.in_flight.insert(
                    key.clone(),
                    InFlight {
                        generation,
                        future: future.clone(),
                    },
                );
                (generation, future)
            }
        };

        let result = future.await;

        let mut state = self.state.borrow_mut();
        let owns_slot = state
            .in_flight
            .get(&key)
            .is_some_and(|in_flight| in_flight.generation == generation);
        if owns_slot {
            state.in_flight.remove(&key);
            match &result {
                Ok(value) => {
                    state.entries.cache_set(key, CachedEntry::new(value.clone()));
                }
                Err(e) => log::warn!("Load for {} failed, not caching: {}", key, e),
            }
        }

        result
    }

    /// Invalidates `key` and loads it again.
    pub async fn refetch<F, Fut>(&self, key: QueryKey, loader: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + 'static,
    {
        self.invalidate(&key);
        self.fetch(key, loader).await
    }

    /// Removes the entry for `key` and forgets any in-flight load for it.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut state = self.state.borrow_mut();
        let removed = state.entries.cache_remove(key).is_some();
        let detached = state.in_flight.remove(key).is_some();
        if removed || detached {
            log::debug!("Invalidated {}", key);
        }
    }

    /// Invalidates every key matching `predicate`.
    pub fn invalidate_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&QueryKey) -> bool,
    {
        let keys: Vec<QueryKey> = {
            let state = self.state.borrow();
            let mut keys: Vec<QueryKey> = state
                .entries
                .key_order()
                .chain(state.in_flight.keys())
                .filter(|&key| predicate(key))
                .cloned()
                .collect();
            keys.sort();
            keys.dedup();
            keys
        };
        for key in &keys {
            self.invalidate(key);
        }
        keys.len()
    }

    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.entries.cache_clear();
        state.in_flight.clear();
        log::debug!("Query cache cleared");
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.state.borrow().in_flight.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.state.borrow().entries.cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
