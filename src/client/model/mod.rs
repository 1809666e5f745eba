//! View state owned by the pages.
//!
//! Everything here is plain data with no Dioxus or browser dependency, so the
//! page behaviour (filtering, carousel navigation, session tracking) can be
//! exercised directly in unit tests.

pub mod cache;
pub mod carousel;
pub mod catalog;
pub mod error;
pub mod leaderboard;
pub mod tracker;
