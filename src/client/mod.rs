pub mod api;
pub mod app;
pub mod component;
pub mod constant;
pub mod hook;
pub mod model;
pub mod route;
pub mod router;
pub mod util;

pub use app::App;
