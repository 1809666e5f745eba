//! Payloads shared by the client and the server.
//!
//! Every type here mirrors a JSON document produced by the bot backend (or by
//! the local `/api/bot` relay). Fields the backend may omit default to zero or
//! `None` so a partial payload still hydrates a complete view model.

pub mod api;
pub mod bot;
pub mod command;
pub mod guild;
pub mod music;
pub mod player;
pub mod stats;
pub mod user;
