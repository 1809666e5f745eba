use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowRight, FaCrown, FaServer, FaTrophy, FaUsers},
    Icon,
};

use crate::{
    client::{
        component::{EmptyState, GuildIcon, Page, Spinner},
        model::{
            cache::Cache,
            leaderboard::{rank_label, split_podium, PODIUM_SIZE},
        },
        util::format::thousands,
    },
    model::guild::GuildSummaryDto,
};

#[cfg(feature = "web")]
use crate::client::{api::guild::get_ranked_guilds, hook::use_poll};

#[component]
pub fn Leaderboard() -> Element {
    let guilds = use_signal(|| Cache::<Vec<GuildSummaryDto>>::NotFetched);

    #[cfg(feature = "web")]
    use_poll(guilds, None, get_ranked_guilds, Cache::or_default);

    let ranked = guilds.read().data().cloned().unwrap_or_default();
    let (podium, rest) = split_podium(&ranked);

    rsx! {
        Title { "Leaderboard | Flixo" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-6xl",
                div {
                    class: "text-center mb-16",
                    h1 {
                        class: "text-5xl md:text-6xl font-black text-white mb-4",
                        "Top "
                        span { class: "text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500", "Networks" }
                    }
                    p { class: "text-gray-400 text-lg", "The largest communities using our ecosystem." }
                }

                if guilds.read().is_pending() {
                    div {
                        class: "flex justify-center items-center gap-3 p-12 text-gray-400",
                        Spinner { class: "w-6 h-6" }
                        "Loading network data..."
                    }
                } else if ranked.is_empty() {
                    EmptyState {
                        message: "No network data found or API is offline.",
                        span { class: "text-gray-600", Icon { width: 32, height: 32, icon: FaServer } }
                        p { class: "text-sm text-gray-500", "Please ensure the backend systems are operational." }
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-10",
                        for (rank, guild) in podium.iter().enumerate() {
                            PodiumCard { key: "{guild.id}", rank, guild: guild.clone() }
                        }
                    }
                    if !rest.is_empty() {
                        div {
                            class: "flex flex-col gap-3",
                            for (offset, guild) in rest.iter().enumerate() {
                                RankRow { key: "{guild.id}", rank: PODIUM_SIZE + offset, guild: guild.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PodiumCard(rank: usize, guild: GuildSummaryDto) -> Element {
    let accent = match rank {
        0 => "border-yellow-400/40 shadow-yellow-500/10 md:-translate-y-4",
        1 => "border-gray-300/30 shadow-gray-400/10",
        _ => "border-amber-600/30 shadow-amber-700/10",
    };

    rsx!(div {
        class: "relative flex flex-col items-center gap-4 p-8 rounded-3xl bg-white/5 border shadow-xl {accent}",
        div {
            class: "absolute top-4 right-4",
            if rank == 0 {
                span { class: "text-yellow-400", Icon { width: 22, height: 22, icon: FaCrown } }
            } else {
                span {
                    class: if rank == 1 { "text-gray-300" } else { "text-amber-600" },
                    Icon { width: 20, height: 20, icon: FaTrophy }
                }
            }
        }
        span {
            class: "text-xs font-bold uppercase tracking-widest text-gray-400",
            "{rank_label(rank)}"
        }
        GuildIcon { guild: guild.clone(), class: "w-24 h-24 text-4xl" }
        h4 { class: "text-xl font-bold text-white text-center truncate max-w-full", "{guild.name}" }
        p {
            class: "flex items-center gap-2 text-sm text-gray-400",
            Icon { width: 14, height: 14, icon: FaUsers }
            "{thousands(guild.member_count)} Members"
        }
        a {
            href: guild.channel_url(),
            target: "_blank",
            rel: "noopener noreferrer",
            class: "w-full py-2 rounded-xl text-center text-sm font-bold text-white bg-white/5 border border-white/10 hover:bg-cyan-500/20 transition-colors",
            "View Network"
        }
    })
}

#[component]
fn RankRow(rank: usize, guild: GuildSummaryDto) -> Element {
    rsx!(div {
        class: "flex items-center justify-between gap-4 px-6 py-4 rounded-2xl bg-white/5 border border-white/5 hover:border-cyan-500/30 transition-colors",
        div {
            class: "flex items-center gap-4 min-w-0",
            span { class: "w-8 text-lg font-black text-gray-500", "{rank + 1}" }
            GuildIcon { guild: guild.clone(), class: "w-10 h-10 text-base" }
            h4 { class: "font-bold text-white truncate", "{guild.name}" }
        }
        div {
            class: "flex items-center gap-4",
            span {
                class: "flex items-center gap-2 text-sm text-gray-400",
                Icon { width: 12, height: 12, icon: FaUsers }
                "{thousands(guild.member_count)}"
            }
            a {
                href: guild.channel_url(),
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "Open {guild.name}",
                class: "p-2 rounded-full bg-white/5 text-gray-300 hover:text-cyan-300",
                Icon { width: 14, height: 14, icon: FaArrowRight }
            }
        }
    })
}
