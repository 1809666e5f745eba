//! Server-side relay for the bot backend.
//!
//! The site owns no data of its own. The server exists so the browser can talk
//! to the bot backend without cross-origin restrictions, and so the bot's
//! identity can be cached between page loads.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers
//! - **Service Layer** (`service/`) - Upstream requests, path rewriting and caching
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (HTTP client, proxy rule, cache)
//! - **Startup** (`startup`) - Initialization of the outbound HTTP client
//! - **Router** (`router`) - Axum route configuration
//!
//! # Routes
//!
//! - `GET /api/bot` - Bot display identity, cached for a short window
//! - `GET /api-proxy/{*path}` - Pass-through to the bot backend origin
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
