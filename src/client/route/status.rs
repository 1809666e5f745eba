use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaChartLine, FaCircleCheck, FaCircleExclamation, FaClock, FaMicrochip, FaMusic, FaServer,
        FaWifi,
    },
    Icon,
};

use crate::{
    client::{
        component::{Page, Spinner},
        model::cache::Cache,
        util::format::{compact_number, format_uptime},
    },
    model::stats::{ShardDto, ShardStatus, StatsDto},
};

#[cfg(feature = "web")]
use crate::client::{api::stats::get_stats, constant::STATUS_POLL_INTERVAL_MS, hook::use_poll};

#[component]
pub fn Status() -> Element {
    let stats = use_signal(|| Cache::<StatsDto>::NotFetched);

    // A failed poll replaces the last snapshot, so the outage banner stays up
    // until the next successful one.
    #[cfg(feature = "web")]
    use_poll(
        stats,
        Some(STATUS_POLL_INTERVAL_MS),
        get_stats,
        Cache::from_result,
    );

    rsx! {
        Title { "Status | Flixo" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-6xl",
                div {
                    class: "text-center mb-12",
                    div {
                        class: "inline-flex p-4 mb-6 rounded-2xl bg-cyan-500/10 border border-cyan-500/20 text-cyan-400",
                        Icon { width: 32, height: 32, icon: FaChartLine }
                    }
                    h1 {
                        class: "text-5xl md:text-6xl font-black text-white mb-4",
                        "System "
                        span { class: "text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500", "Status" }
                    }
                    p {
                        class: "text-gray-400 text-lg",
                        "Real-time metrics and operational insights across our global infrastructure."
                    }
                }

                {
                    match &*stats.read() {
                        Cache::Fetched(snapshot) => rsx! {
                            StatusBoard { snapshot: snapshot.clone() }
                        },
                        Cache::Error(_) => rsx! {
                            div {
                                class: "flex flex-col items-center gap-4 p-12 rounded-3xl text-center bg-red-500/10 border border-red-500/20",
                                span { class: "text-red-400", Icon { width: 48, height: 48, icon: FaCircleExclamation } }
                                p { class: "text-2xl font-black text-red-300", "Major Outage Detected" }
                                p {
                                    class: "max-w-md text-gray-400",
                                    "Unable to connect to the primary backend infrastructure. Our engineers are investigating."
                                }
                            }
                        },
                        Cache::NotFetched | Cache::Loading => rsx! {
                            div {
                                class: "flex flex-col items-center gap-4 py-20 text-gray-400",
                                Spinner {}
                                "Fetching Telemetry..."
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBoard(snapshot: StatsDto) -> Element {
    let shards = snapshot.shards_or_implicit();

    rsx! {
        div {
            class: "flex items-center justify-between gap-4 mb-8 px-6 py-4 rounded-2xl bg-green-500/10 border border-green-500/20",
            div {
                class: "flex items-center gap-3",
                span { class: "w-3 h-3 rounded-full bg-green-400 animate-pulse" }
                span { class: "font-bold text-green-300", "All Systems Operational" }
            }
            span {
                class: "flex items-center gap-2 text-sm text-gray-400",
                Icon { width: 14, height: 14, icon: FaWifi }
                "Live Updates"
            }
        }

        div {
            class: "grid grid-cols-2 lg:grid-cols-4 gap-4 mb-12",
            MetricCard {
                label: "Uptime",
                value: format_uptime(snapshot.uptime),
                Icon { width: 18, height: 18, icon: FaClock }
            }
            MetricCard {
                label: "Latency",
                value: format!("{} ms", snapshot.ping),
                Icon { width: 18, height: 18, icon: FaChartLine }
            }
            MetricCard {
                label: "Networks",
                value: compact_number(snapshot.servers),
                Icon { width: 18, height: 18, icon: FaServer }
            }
            MetricCard {
                label: "Active Streams",
                value: compact_number(snapshot.players),
                Icon { width: 18, height: 18, icon: FaMusic }
            }
        }

        div {
            class: "p-6 md:p-8 rounded-3xl bg-white/5 border border-white/10",
            div {
                class: "flex items-center gap-3 mb-6",
                span { class: "text-cyan-400", Icon { width: 20, height: 20, icon: FaMicrochip } }
                h2 { class: "text-2xl font-bold text-white", "Node Cluster Status" }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                for shard in shards {
                    ShardCard { key: "{shard.id}", shard }
                }
            }
        }
    }
}

#[component]
fn MetricCard(label: &'static str, value: String, children: Element) -> Element {
    rsx!(div {
        class: "p-6 rounded-3xl bg-white/5 border border-white/10",
        div {
            class: "flex items-center gap-2 mb-3 text-gray-400",
            {children}
            p { class: "text-sm font-bold uppercase tracking-widest", "{label}" }
        }
        p { class: "text-3xl font-black text-white", "{value}" }
    })
}

#[component]
fn ShardCard(shard: ShardDto) -> Element {
    let status = shard.status();
    let badge = match status {
        ShardStatus::Online => "text-green-400 bg-green-500/10 border-green-500/20",
        ShardStatus::Connecting => "text-yellow-400 bg-yellow-500/10 border-yellow-500/20",
        ShardStatus::Offline => "text-red-400 bg-red-500/10 border-red-500/20",
    };

    rsx!(div {
        class: "p-5 rounded-2xl bg-black/30 border border-white/5",
        div {
            class: "flex items-center justify-between mb-4",
            h3 {
                class: "text-lg font-bold text-white",
                "Shard "
                span { class: "text-cyan-400", "#{shard.id}" }
            }
            span {
                class: "flex items-center gap-1.5 px-3 py-1 rounded-full text-xs font-bold border {badge}",
                Icon { width: 12, height: 12, icon: FaCircleCheck }
                "{status.label()}"
            }
        }
        dl {
            class: "grid grid-cols-[1fr_auto] gap-y-2 text-sm",
            dt { class: "text-gray-500", "Heartbeat" }
            dd { class: "font-mono text-gray-200", "{shard.ping}ms" }
            dt { class: "text-gray-500", "Cached Guilds" }
            dd { class: "font-mono text-gray-200", "{compact_number(shard.servers)}" }
            dt { class: "text-gray-500", "Total Users" }
            dd { class: "font-mono text-gray-200", "{compact_number(shard.users)}" }
        }
    })
}
