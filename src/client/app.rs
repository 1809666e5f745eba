use dioxus::prelude::*;

use crate::client::{
    constant::{SITE_DESCRIPTION, SITE_NAME},
    router::Route,
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME} - Premium Discord Music Bot" }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        document::Meta {
            name: "og:title",
            content: SITE_NAME
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
