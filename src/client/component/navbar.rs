use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaBars, FaBolt, FaHouse, FaRadio, FaServer, FaTerminal, FaTrophy, FaXmark,
    },
    Icon,
};

use crate::{
    client::{
        constant::{INVITE_URL, SITE_NAME},
        model::cache::Cache,
        router::Route,
    },
    model::bot::BotMetaDto,
};

#[cfg(feature = "web")]
use crate::client::{api::bot::get_bot_meta, hook::use_poll};

#[component]
pub fn Navbar() -> Element {
    let meta = use_signal(|| Cache::<BotMetaDto>::NotFetched);
    let mut menu_open = use_signal(|| false);
    let current = use_route::<Route>();

    // One lookup per page load; a failure keeps the fallback name and spinner.
    #[cfg(feature = "web")]
    use_poll(meta, None, get_bot_meta, Cache::or_default);

    let bot = meta.read().data().cloned().unwrap_or_default();
    let name = bot.display_name(SITE_NAME).to_string();
    let avatar = bot.avatar_url.clone().filter(|url| !url.is_empty());

    rsx!(div {
        class: "fixed top-0 inset-x-0 z-50 flex justify-center px-4 pt-6",
        nav {
            class: "relative w-full max-w-5xl flex items-center justify-between gap-4 px-6 py-3 rounded-full bg-black/40 border border-white/10 backdrop-blur-xl shadow-2xl",
            Link {
                to: Route::Home {},
                class: "flex items-center gap-3 group",
                onclick: move |_| menu_open.set(false),
                if let Some(url) = avatar {
                    img {
                        src: "{url}",
                        alt: "{name} avatar",
                        class: "w-10 h-10 rounded-full border-2 border-cyan-500/50 object-cover",
                    }
                } else {
                    div {
                        class: "flex items-end gap-1 h-6 w-6",
                        for i in 1..=3 {
                            div {
                                key: "{i}",
                                class: "w-1.5 rounded-sm bg-gradient-to-t from-cyan-500 to-sky-400 animate-pulse",
                                style: "height: {8 * i}px; animation-delay: {i * 100}ms",
                            }
                        }
                    }
                }
                span {
                    class: "hidden sm:block text-2xl font-black tracking-tight text-white group-hover:text-cyan-300 transition-colors",
                    "{name}"
                }
            }

            div {
                class: "hidden md:flex items-center gap-1 bg-white/5 border border-white/5 rounded-full p-1",
                NavLinks { current: current.clone() }
            }

            div {
                class: "flex items-center gap-2",
                a {
                    href: INVITE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "px-6 py-2.5 rounded-full font-bold text-sm flex items-center gap-2 text-white bg-white/5 border border-white/10 hover:bg-cyan-500/20 hover:border-cyan-500/50 transition-all",
                    span { class: "text-cyan-400", Icon { width: 14, height: 14, icon: FaBolt } }
                    span { class: "hidden sm:inline", "Add to Discord" }
                    span { class: "sm:hidden", "Invite" }
                }
                button {
                    class: "md:hidden p-2 rounded-full text-gray-300 hover:text-cyan-300",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon { width: 18, height: 18, icon: FaXmark }
                    } else {
                        Icon { width: 18, height: 18, icon: FaBars }
                    }
                }
            }

            if menu_open() {
                div {
                    class: "md:hidden absolute top-full inset-x-0 mt-3 flex flex-col gap-1 p-3 rounded-3xl bg-black/80 border border-white/10 backdrop-blur-xl",
                    onclick: move |_| menu_open.set(false),
                    NavLinks { current }
                }
            }
        }
    })
}

#[component]
fn NavLinks(current: Route) -> Element {
    rsx!(
        NavLink {
            to: Route::Home {},
            active: current == Route::Home {},
            label: "Home",
            Icon { width: 14, height: 14, icon: FaHouse }
        }
        NavLink {
            to: Route::Status {},
            active: current == Route::Status {},
            label: "Status",
            Icon { width: 14, height: 14, icon: FaServer }
        }
        NavLink {
            to: Route::Commands {},
            active: current == Route::Commands {},
            label: "Commands",
            Icon { width: 14, height: 14, icon: FaTerminal }
        }
        NavLink {
            to: Route::Live {},
            active: current == Route::Live {},
            label: "Live Music",
            Icon { width: 14, height: 14, icon: FaRadio }
        }
        NavLink {
            to: Route::Leaderboard {},
            active: current == Route::Leaderboard {},
            label: "Leaderboard",
            Icon { width: 14, height: 14, icon: FaTrophy }
        }
    )
}

#[component]
fn NavLink(to: Route, active: bool, label: &'static str, children: Element) -> Element {
    let state = if active {
        "text-white bg-gradient-to-r from-cyan-400 to-sky-500 shadow-lg shadow-cyan-500/20"
    } else {
        "text-gray-400 hover:text-cyan-300"
    };

    rsx!(Link {
        to,
        class: "px-4 py-2 rounded-full text-sm font-bold flex items-center gap-2 transition-colors duration-300 {state}",
        {children}
        "{label}"
    })
}
