use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaFileLines, FaHeart, FaLock, FaMusic, FaShieldHalved, FaUser},
    Icon,
};

use crate::client::{
    constant::{SITE_NAME, SUPPORT_URL},
    router::Route,
};

const LINK_CLASS: &str = "text-gray-400 hover:text-cyan-400 text-sm transition-colors";

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx!(footer {
        class: "relative mt-32 w-full border-t border-white/5 bg-black/50 backdrop-blur-xl",
        div {
            class: "max-w-7xl mx-auto px-6 py-12 md:py-16 grid grid-cols-1 md:grid-cols-4 gap-10",
            div {
                class: "md:col-span-2",
                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-3 w-fit mb-4 group",
                    div {
                        class: "p-2 rounded-xl bg-cyan-500/10 border border-cyan-500/20",
                        span { class: "text-cyan-400", Icon { width: 22, height: 22, icon: FaMusic } }
                    }
                    span {
                        class: "text-2xl font-black tracking-tight text-white group-hover:text-cyan-300",
                        {SITE_NAME}
                    }
                }
                p {
                    class: "text-gray-400 text-sm max-w-sm leading-relaxed mb-6",
                    "The premium music companion for your Discord server. Delivering high-quality audio and a seamless listening experience."
                }
                p {
                    class: "flex items-center gap-2 text-sm text-gray-500 font-medium",
                    "Engineered with "
                    span { class: "text-pink-500", Icon { width: 14, height: 14, icon: FaHeart } }
                    " by Flixo Development"
                }
            }
            div {
                h4 {
                    class: "text-white font-bold mb-4 flex items-center gap-2",
                    span { class: "text-cyan-500", Icon { width: 14, height: 14, icon: FaUser } }
                    "Platform"
                }
                ul {
                    class: "space-y-3",
                    li { Link { to: Route::Home {}, class: LINK_CLASS, "Home" } }
                    li { Link { to: Route::Commands {}, class: LINK_CLASS, "Commands" } }
                    li { Link { to: Route::Status {}, class: LINK_CLASS, "System Status" } }
                    li { Link { to: Route::Leaderboard {}, class: LINK_CLASS, "Leaderboard" } }
                    li { Link { to: Route::Team {}, class: LINK_CLASS, "Developers" } }
                }
            }
            div {
                h4 {
                    class: "text-white font-bold mb-4 flex items-center gap-2",
                    span { class: "text-cyan-500", Icon { width: 14, height: 14, icon: FaShieldHalved } }
                    "Legal & Support"
                }
                ul {
                    class: "space-y-3",
                    li {
                        Link {
                            to: Route::Terms {},
                            class: "{LINK_CLASS} flex items-center gap-2",
                            Icon { width: 12, height: 12, icon: FaFileLines }
                            "Terms of Service"
                        }
                    }
                    li {
                        Link {
                            to: Route::Privacy {},
                            class: "{LINK_CLASS} flex items-center gap-2",
                            Icon { width: 12, height: 12, icon: FaLock }
                            "Privacy Policy"
                        }
                    }
                    li {
                        a {
                            href: SUPPORT_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: LINK_CLASS,
                            "Support Server"
                        }
                    }
                }
            }
        }
        div {
            class: "border-t border-white/5 py-6",
            p {
                class: "max-w-7xl mx-auto px-6 text-gray-500 text-sm",
                "© {year} {SITE_NAME}. All rights reserved. Not affiliated with Discord."
            }
        }
    })
}
