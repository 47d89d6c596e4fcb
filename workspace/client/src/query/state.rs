use super::key::QueryKey;
use crate::error::{ApiError, Result};

/// API fetch state enum
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// The query is disabled, e.g. no identifier yet
    NotStarted,
    Loading,
    Success(T),
    Error(ApiError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> FetchState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::NotStarted => FetchState::NotStarted,
            Self::Loading => FetchState::Loading,
            Self::Success(data) => FetchState::Success(f(data)),
            Self::Error(err) => FetchState::Error(err),
        }
    }

    pub fn as_ref(&self) -> FetchState<&T> {
        match self {
            Self::NotStarted => FetchState::NotStarted,
            Self::Loading => FetchState::Loading,
            Self::Success(data) => FetchState::Success(data),
            Self::Error(err) => FetchState::Error(err.clone()),
        }
    }
}

impl<T> From<Result<T>> for FetchState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err),
        }
    }
}

/// Fetch state bound to the key it was requested for.
///
/// A response is applied only while its key is still current, so a slow
/// reply for a superseded key (an old filter, a previous metric) is dropped
/// instead of rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySlot<T> {
    key: Option<QueryKey>,
    state: FetchState<T>,
}

impl<T> Default for QuerySlot<T> {
    fn default() -> Self {
        Self {
            key: None,
            state: FetchState::NotStarted,
        }
    }
}

impl<T> QuerySlot<T> {
    pub fn key(&self) -> Option<&QueryKey> {
        self.key.as_ref()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn into_state(self) -> FetchState<T> {
        self.state
    }

    /// Starts loading `key`. Any result for a previous key is cleared.
    pub fn begin(&mut self, key: QueryKey) {
        self.key = Some(key);
        self.state = FetchState::Loading;
    }

    /// Shows an already cached value for `key` without a loading phase.
    pub fn seed(&mut self, key: QueryKey, data: T) {
        self.key = Some(key);
        self.state = FetchState::Success(data);
    }

    /// Applies a result if `key` is still current. Returns whether it was applied.
    pub fn resolve(&mut self, key: &QueryKey, result: Result<T>) -> bool {
        if self.key.as_ref() != Some(key) {
            log::debug!("Discarding superseded response for {}", key);
            return false;
        }
        self.state = result.into();
        true
    }

    /// Puts the slot back to idle, e.g. when the identifier becomes blank.
    pub fn disable(&mut self) {
        self.key = None;
        self.state = FetchState::NotStarted;
    }

    pub fn is_current(&self, key: &QueryKey) -> bool {
        self.key.as_ref() == Some(key)
    }
}
