use dioxus_logger::tracing;

use crate::client::model::error::ApiError;

/// Result of the latest fetch for one piece of page state.
///
/// Each completed fetch replaces the whole value; nothing is merged with what
/// was there before.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    /// Keeps the error, for pages that show a failure state.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }

    /// True until the first fetch has completed.
    pub fn is_pending(&self) -> bool {
        matches!(self, Cache::NotFetched | Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }
}

impl<T: Default> Cache<T> {
    /// Swallows the error into a default value, for pages that never show one.
    pub fn or_default(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => {
                tracing::warn!("Falling back to defaults: {}", err);
                Cache::Fetched(T::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_kept_or_swallowed() {
        let err = ApiError::network("offline");

        let kept: Cache<u64> = Cache::from_result(Err(err.clone()));
        assert_eq!(kept, Cache::Error(err.clone()));
        assert_eq!(kept.data(), None);

        let swallowed: Cache<u64> = Cache::or_default(Err(err));
        assert_eq!(swallowed.data(), Some(&0));
        assert!(!swallowed.is_pending());
    }

    #[test]
    fn pending_until_first_result() {
        assert!(Cache::<u64>::NotFetched.is_pending());
        assert!(Cache::<u64>::Loading.is_pending());
        assert!(!Cache::from_result(Ok(5u64)).is_pending());
    }
}
