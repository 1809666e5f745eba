#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod bot;

#[cfg(feature = "web")]
pub mod command;

#[cfg(feature = "web")]
pub mod guild;

#[cfg(feature = "web")]
pub mod music;

#[cfg(feature = "web")]
pub mod player;

#[cfg(feature = "web")]
pub mod stats;

#[cfg(feature = "web")]
pub mod user;
