use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{
    Commands, Home, Leaderboard, Live, NotFound, Privacy, Status, Team, Terms,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/leaderboard")]
    Leaderboard {},

    #[route("/commands")]
    Commands {},

    #[route("/live")]
    Live {},

    #[route("/status")]
    Status {},

    #[route("/team")]
    Team {},

    #[route("/terms")]
    Terms {},

    #[route("/privacy")]
    Privacy {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
