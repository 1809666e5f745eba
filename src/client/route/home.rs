use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::FaDiscord,
        fa_solid_icons::{
            FaChevronLeft, FaChevronRight, FaGamepad, FaGear, FaMusic, FaServer, FaShieldHalved,
            FaUsers,
        },
    },
    Icon,
};

use crate::{
    client::{
        component::{EmptyState, GuildIcon, Page, Spinner},
        constant::{INVITE_URL, SITE_NAME, SUPPORT_URL},
        model::{cache::Cache, carousel::Carousel, leaderboard::rank_label},
        util::format::thousands,
    },
    model::{bot::BotMetaDto, guild::GuildSummaryDto, stats::StatsDto},
};

#[cfg(feature = "web")]
use crate::client::{
    api::{bot::get_bot_meta, guild::get_top_servers, stats::get_stats},
    constant::CAROUSEL_INTERVAL_MS,
    hook::use_poll,
};
#[cfg(feature = "web")]
use gloo_timers::future::TimeoutFuture;

#[component]
pub fn Home() -> Element {
    let meta = use_signal(|| Cache::<BotMetaDto>::NotFetched);
    let stats = use_signal(|| Cache::<StatsDto>::NotFetched);
    let servers = use_signal(|| Cache::<Vec<GuildSummaryDto>>::NotFetched);
    let mut carousel = use_signal(Carousel::default);

    #[cfg(feature = "web")]
    {
        use_poll(meta, None, get_bot_meta, Cache::or_default);
        use_poll(stats, None, get_stats, Cache::or_default);
        use_poll(servers, None, get_top_servers, Cache::or_default);

        // Reruns on every carousel change, so a manual move restarts the wait.
        let _auto_advance = use_resource(move || async move {
            if !carousel().is_running() {
                return;
            }
            TimeoutFuture::new(CAROUSEL_INTERVAL_MS).await;
            carousel.with_mut(Carousel::next);
        });
    }

    use_effect(move || {
        let len = servers.read().data().map_or(0, Vec::len);
        carousel.with_mut(|c| c.resize(len));
    });

    let bot = meta.read().data().cloned().unwrap_or_default();
    let name = bot.display_name(SITE_NAME).to_string();
    let avatar = bot.avatar_url.clone().filter(|url| !url.is_empty());

    let stats_pending = stats.read().is_pending();
    let snapshot = stats.read().data().cloned().unwrap_or_default();
    let stat = |text: String| {
        if stats_pending {
            "...".to_string()
        } else {
            text
        }
    };

    let guilds = servers.read().data().cloned().unwrap_or_default();
    let position = carousel();

    rsx! {
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col items-center text-center",

                div {
                    class: "relative mb-8 w-32 h-32 rounded-full p-1 bg-gradient-to-br from-cyan-400 to-sky-600 shadow-2xl shadow-cyan-500/30",
                    if let Some(url) = avatar {
                        img {
                            src: "{url}",
                            alt: "Bot Avatar",
                            class: "w-full h-full rounded-full object-cover",
                        }
                    } else {
                        div { class: "w-full h-full rounded-full bg-gray-900 animate-pulse" }
                    }
                }
                h1 {
                    class: "text-5xl md:text-7xl font-black tracking-tight mb-6",
                    span { class: "text-white mr-4", "Meet" }
                    span {
                        class: "text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500",
                        "{name}"
                    }
                }
                p {
                    class: "max-w-2xl text-lg text-gray-400 mb-10",
                    "A premium, high-quality music companion for your Discord server. Designed with elegance and built for reliable playback."
                }
                div {
                    class: "flex flex-wrap justify-center gap-4 mb-20",
                    a {
                        href: INVITE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "px-8 py-4 rounded-full font-bold flex items-center gap-3 text-white bg-gradient-to-r from-cyan-500 to-sky-600 shadow-lg shadow-cyan-500/30 hover:scale-105 transition-transform",
                        Icon { width: 20, height: 20, icon: FaGamepad }
                        "Add to Discord"
                    }
                    a {
                        href: SUPPORT_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "px-8 py-4 rounded-full font-bold flex items-center gap-3 text-gray-200 bg-white/5 border border-white/10 hover:bg-white/10 transition-colors",
                        Icon { width: 20, height: 20, icon: FaShieldHalved }
                        "Support Server"
                    }
                }

                div {
                    class: "w-full grid grid-cols-2 md:grid-cols-4 gap-4 mb-24",
                    StatCard {
                        label: "Servers",
                        value: stat(thousands(snapshot.servers)),
                        span { class: "text-cyan-400", Icon { width: 32, height: 32, icon: FaServer } }
                    }
                    StatCard {
                        label: "Users",
                        value: stat(thousands(snapshot.users)),
                        span { class: "text-purple-400", Icon { width: 32, height: 32, icon: FaUsers } }
                    }
                    StatCard {
                        label: "Commands",
                        value: stat(thousands(snapshot.commands)),
                        span { class: "text-orange-400", Icon { width: 32, height: 32, icon: FaGear } }
                    }
                    StatCard {
                        label: "Ping",
                        value: stat(format!("{}ms", snapshot.ping)),
                        span { class: "text-pink-400", Icon { width: 32, height: 32, icon: FaMusic } }
                    }
                }

                div {
                    class: "w-full mb-12",
                    h2 { class: "text-4xl font-black text-white mb-3", "Top Networks" }
                    p { class: "text-gray-400", "The largest communities listening with {name}." }
                }

                if servers.read().is_pending() {
                    div {
                        class: "flex items-center gap-3 p-12 text-gray-400",
                        Spinner { class: "w-6 h-6" }
                        "Loading network data..."
                    }
                } else if guilds.is_empty() {
                    EmptyState {
                        message: "No network data found or API is offline.",
                        span { class: "text-gray-600", Icon { width: 32, height: 32, icon: FaServer } }
                    }
                } else {
                    div {
                        class: "w-full max-w-3xl",
                        onmouseenter: move |_| carousel.with_mut(|c| c.set_paused(true)),
                        onmouseleave: move |_| carousel.with_mut(|c| c.set_paused(false)),

                        div {
                            class: "flex items-center gap-4",
                            button {
                                class: "p-3 rounded-full bg-white/5 border border-white/10 text-gray-300 hover:text-cyan-300",
                                aria_label: "Previous server",
                                onclick: move |_| carousel.with_mut(Carousel::prev),
                                Icon { width: 18, height: 18, icon: FaChevronLeft }
                            }
                            if let Some(guild) = guilds.get(position.active()).cloned() {
                                GuildSlide { rank: position.active(), guild }
                            }
                            button {
                                class: "p-3 rounded-full bg-white/5 border border-white/10 text-gray-300 hover:text-cyan-300",
                                aria_label: "Next server",
                                onclick: move |_| carousel.with_mut(Carousel::next),
                                Icon { width: 18, height: 18, icon: FaChevronRight }
                            }
                        }

                        p {
                            class: "mt-4 text-sm font-mono text-gray-500",
                            "{position.active() + 1} / {position.len()}"
                        }
                        div {
                            class: "flex justify-center gap-2 mt-4",
                            for (index, guild) in guilds.iter().enumerate() {
                                button {
                                    key: "{guild.id}",
                                    aria_label: "Show {guild.name}",
                                    class: "h-2 rounded-full transition-all duration-300",
                                    class: if index == position.active() { "w-8 bg-cyan-400" } else { "w-2 bg-white/20 hover:bg-white/40" },
                                    onclick: move |_| carousel.with_mut(|c| c.go_to(index as isize)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, children: Element) -> Element {
    rsx!(div {
        class: "flex flex-col items-center p-6 rounded-3xl bg-white/5 border border-white/10 backdrop-blur-md",
        div { class: "mb-4 opacity-80", {children} }
        h3 { class: "text-3xl font-black text-white mb-1", "{value}" }
        p { class: "text-sm font-bold uppercase tracking-widest text-gray-500", "{label}" }
    })
}

#[component]
fn GuildSlide(rank: usize, guild: GuildSummaryDto) -> Element {
    rsx!(div {
        class: "flex-1 flex flex-col items-center gap-4 p-8 rounded-3xl bg-gradient-to-b from-white/10 to-white/5 border border-white/10 shadow-xl",
        span {
            class: "px-3 py-1 rounded-full text-xs font-bold uppercase tracking-widest text-cyan-300 bg-cyan-500/10 border border-cyan-500/20",
            "{rank_label(rank)}"
        }
        GuildIcon { guild: guild.clone(), class: "w-24 h-24 text-4xl" }
        h3 { class: "text-2xl font-bold text-white truncate max-w-full", "{guild.name}" }
        p {
            class: "flex items-center gap-2 text-gray-400",
            Icon { width: 14, height: 14, icon: FaUsers }
            "{thousands(guild.member_count)} Members"
        }
        a {
            href: guild.channel_url(),
            target: "_blank",
            rel: "noopener noreferrer",
            class: "flex items-center gap-2 px-5 py-2 rounded-full text-sm font-bold text-white bg-white/5 border border-white/10 hover:bg-[#5865F2] transition-colors",
            Icon { width: 14, height: 14, icon: FaDiscord }
            "View Network"
        }
    })
}
