//! Polling primitive used by every page that refreshes on a timer.
//!
//! The loop runs as a task owned by the calling component. Unmounting the
//! component drops the task, and with it any request still in flight, so a
//! late response can never write into a page that is gone.

use std::future::Future;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::client::model::{cache::Cache, error::ApiError};

/// Runs `tick` on mount and then `interval_ms` after each run completes.
pub fn use_interval<F, Fut>(interval_ms: u32, mut tick: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    use_hook(move || {
        spawn(async move {
            loop {
                tick().await;
                TimeoutFuture::new(interval_ms).await;
            }
        })
    });
}

/// Fetches into `target` on mount and, given an interval, again after every
/// interval for the lifetime of the component.
///
/// Every result goes through `reduce` and replaces `target` wholesale, so the
/// reducer alone decides what a failure looks like on the page.
///
/// # Arguments
/// - `target` - Page state the results are written to
/// - `interval_ms` - Delay between fetches, `None` for a single fetch
/// - `fetch` - Request to issue
/// - `reduce` - Turns a result into the new state
pub fn use_poll<T, F, Fut>(
    mut target: Signal<Cache<T>>,
    interval_ms: Option<u32>,
    mut fetch: F,
    reduce: fn(Result<T, ApiError>) -> Cache<T>,
) where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_hook(move || {
        spawn(async move {
            target.set(Cache::Loading);
            loop {
                let result = fetch().await;
                target.set(reduce(result));

                match interval_ms {
                    Some(ms) => TimeoutFuture::new(ms).await,
                    None => break,
                }
            }
        })
    });
}
