pub mod commands;
pub mod home;
pub mod leaderboard;
pub mod legal;
pub mod live;
pub mod not_found;
pub mod status;
pub mod team;

pub use commands::Commands;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use legal::{Privacy, Terms};
pub use live::Live;
pub use not_found::NotFound;
pub use status::Status;
pub use team::Team;
