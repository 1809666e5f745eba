//! Timer-driven hooks shared by the pages.

#[cfg(feature = "web")]
pub mod poll;

#[cfg(feature = "web")]
pub use poll::{use_interval, use_poll};
