pub mod bot;
pub mod proxy;
