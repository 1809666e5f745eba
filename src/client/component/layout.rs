use dioxus::prelude::*;

use crate::client::{
    component::{Footer, Navbar},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen bg-gray-950 text-gray-100",
        Navbar {  }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        Footer {  }
    })
}
