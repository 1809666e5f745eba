use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaArrowLeft, Icon};

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center min-h-[60vh] text-center",
            p {
                class: "text-8xl font-black text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500 mb-4",
                "404"
            }
            h1 { class: "text-3xl font-bold text-white mb-2", "Page not found" }
            p {
                class: "text-gray-400 mb-8",
                "Nothing lives at "
                code { class: "px-2 py-0.5 rounded bg-white/10 text-cyan-300", "/{path}" }
            }
            Link {
                to: Route::Home {},
                class: "inline-flex items-center gap-2 px-6 py-3 rounded-full font-bold text-white bg-white/5 border border-white/10 hover:bg-cyan-500/20 transition-colors",
                Icon { width: 14, height: 14, icon: FaArrowLeft }
                "Back home"
            }
        }
    }
}
