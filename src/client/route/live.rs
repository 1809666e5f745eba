use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaChartLine, FaChevronRight, FaCompactDisc, FaHeadphones, FaMagnifyingGlass, FaMusic,
        FaPause, FaPlay, FaRadio, FaTrophy, FaVolumeHigh,
    },
    Icon,
};

use crate::{
    client::{
        component::{Page, Spinner},
        model::{cache::Cache, tracker::TrackerState},
        util::format::{format_number, format_track_time},
    },
    model::{
        music::{MusicStatsDto, TrackStatDto},
        player::PlayerSessionDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        music::get_music_stats,
        player::{get_guild_player, run_lookup},
    },
    constant::LIVE_POLL_INTERVAL_MS,
    hook::use_interval,
    model::tracker::Lookup,
};

/// Walks the lookup chain for one submitted query until the tracker settles.
#[cfg(feature = "web")]
async fn search_session(mut tracker: Signal<TrackerState>, mut lookup: Lookup) {
    loop {
        let result = run_lookup(&lookup).await;
        match tracker.with_mut(|state| state.on_lookup(&lookup, result)) {
            Some(next) => lookup = next,
            None => break,
        }
    }
}

#[component]
pub fn Live() -> Element {
    let mut query = use_signal(String::new);
    let mut tracker = use_signal(TrackerState::default);
    let music = use_signal(|| Cache::<MusicStatsDto>::NotFetched);

    // Aggregates refresh regardless of tracking; the session only while tracked.
    #[cfg(feature = "web")]
    {
        let mut music = music;
        use_interval(LIVE_POLL_INTERVAL_MS, move || async move {
            music.set(Cache::or_default(get_music_stats().await));

            let target = tracker.peek().poll_target();
            if let Some(target) = target {
                let result = get_guild_player(&target).await;
                tracker.with_mut(|state| state.on_poll(&target, result));
            }
        });
    }

    let mut search = move || {
        let submitted = tracker.with_mut(|state| state.submit(&query.peek()));

        #[cfg(feature = "web")]
        {
            if let Some(lookup) = submitted {
                spawn(search_session(tracker, lookup));
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = submitted;
    };

    let state = tracker();
    let searching = state.is_searching();
    let can_submit = !searching && !query.read().trim().is_empty();
    let aggregate = music.read().data().cloned().unwrap_or_default();

    rsx! {
        Title { "Live Music | Flixo" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-5xl",
                div {
                    class: "text-center mb-12",
                    div {
                        class: "inline-flex p-4 mb-6 rounded-2xl bg-cyan-500/10 border border-cyan-500/20 text-cyan-400",
                        Icon { width: 32, height: 32, icon: FaRadio }
                    }
                    h1 {
                        class: "text-5xl md:text-6xl font-black text-white mb-4",
                        "Live "
                        span { class: "text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500", "Music" }
                    }
                    p {
                        class: "text-gray-400 text-lg",
                        "Track a server session or discover top hits streaming on the network right now."
                    }
                }

                div {
                    class: "relative flex items-center gap-2 max-w-2xl mx-auto mb-8 p-2 rounded-full bg-black/40 border border-white/10 backdrop-blur-xl",
                    span {
                        class: "pl-4 text-gray-500",
                        Icon { width: 18, height: 18, icon: FaMagnifyingGlass }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Discord Server ID or User ID...",
                        class: "flex-1 bg-transparent px-2 py-3 text-white placeholder-gray-500 focus:outline-none",
                        value: "{query}",
                        oninput: move |event| query.set(event.value()),
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                search();
                            }
                        },
                    }
                    button {
                        class: "px-8 py-3 rounded-full font-bold text-white bg-gradient-to-r from-cyan-500 to-sky-600 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !can_submit,
                        onclick: move |_| search(),
                        if searching {
                            Spinner { class: "w-5 h-5" }
                        } else {
                            "Track"
                        }
                    }
                }

                if let Some(error) = state.error() {
                    div {
                        class: "max-w-2xl mx-auto mb-8 px-6 py-4 rounded-2xl text-center text-red-300 bg-red-500/10 border border-red-500/20",
                        "{error}"
                    }
                }

                if let Some(session) = state.session() {
                    PlayerCard { session: session.clone() }
                } else {
                    div {
                        class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        div {
                            class: "p-6 rounded-3xl bg-white/5 border border-white/10",
                            div {
                                class: "flex items-center gap-3 mb-6",
                                span { class: "text-cyan-400", Icon { width: 20, height: 20, icon: FaChartLine } }
                                h3 { class: "text-xl font-bold text-white", "Active Streams" }
                                span {
                                    class: "ml-auto flex items-center gap-2 px-3 py-1 rounded-full text-xs font-bold text-red-400 bg-red-500/10",
                                    div { class: "w-2 h-2 rounded-full bg-red-500 animate-pulse" }
                                    "Live"
                                }
                            }
                            if aggregate.recent_tracks.is_empty() {
                                div {
                                    class: "flex flex-col items-center gap-3 py-12 text-gray-500",
                                    Icon { width: 28, height: 28, icon: FaMusic }
                                    p { "No active streams found." }
                                }
                            } else {
                                div {
                                    class: "flex flex-col gap-2",
                                    for (index, track) in aggregate.recent_tracks.iter().enumerate() {
                                        RecentTrackRow { key: "{index}", track: track.clone() }
                                    }
                                }
                            }
                        }
                        div {
                            class: "p-6 rounded-3xl bg-white/5 border border-white/10",
                            div {
                                class: "flex items-center gap-3 mb-6",
                                span { class: "text-amber-400", Icon { width: 20, height: 20, icon: FaTrophy } }
                                h3 { class: "text-xl font-bold text-white", "Top Played Hits" }
                            }
                            if aggregate.top_tracks.is_empty() {
                                div {
                                    class: "flex flex-col items-center gap-3 py-12 text-gray-500",
                                    Spinner { class: "w-6 h-6" }
                                    p { "Aggregating statistics..." }
                                }
                            } else {
                                div {
                                    class: "flex flex-col gap-2",
                                    for (rank, track) in aggregate.top_tracks.iter().enumerate() {
                                        TopTrackRow { key: "{rank}", rank, track: track.clone() }
                                    }
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
fn PlayerCard(session: PlayerSessionDto) -> Element {
    let Some(track) = session.current_track.clone() else {
        return rsx!(div {
            class: "max-w-2xl mx-auto p-8 rounded-3xl text-center text-gray-400 bg-white/5 border border-white/10",
            "Connected to voice, nothing is playing right now."
        });
    };

    let thumbnail = track.thumbnail.clone().filter(|url| !url.is_empty());
    let progress = session.progress_percent();
    let position = format_track_time(session.position);
    let duration = format_track_time(session.duration_ms());
    let listeners = format_number(session.member_count);

    rsx!(div {
        class: "relative overflow-hidden rounded-3xl bg-black/40 border border-white/10 shadow-2xl",
        if let Some(url) = thumbnail.clone() {
            div {
                class: "absolute inset-0 bg-cover bg-center opacity-20 blur-3xl scale-110",
                style: "background-image: url('{url}')",
            }
        }
        div {
            class: "relative flex flex-col md:flex-row items-center gap-8 p-8 md:p-10",
            div {
                class: "relative shrink-0 w-40 h-40 md:w-48 md:h-48 rounded-2xl overflow-hidden bg-white/5 flex items-center justify-center",
                if let Some(url) = thumbnail {
                    img { src: "{url}", alt: "Thumbnail", class: "w-full h-full object-cover" }
                } else {
                    span {
                        class: "text-cyan-400 opacity-50",
                        class: if session.is_playing { "animate-spin" },
                        Icon { width: 80, height: 80, icon: FaCompactDisc }
                    }
                }
                div {
                    class: "absolute bottom-2 right-2 p-2 rounded-full bg-black/60 text-white",
                    if session.is_playing {
                        Icon { width: 14, height: 14, icon: FaPause }
                    } else {
                        Icon { width: 14, height: 14, icon: FaPlay }
                    }
                }
            }
            div {
                class: "flex-1 w-full min-w-0",
                div {
                    class: "flex items-center gap-2 mb-3 text-xs font-bold uppercase tracking-widest text-cyan-400",
                    span { class: "w-2 h-2 rounded-full bg-cyan-400 animate-ping" }
                    "Now Streaming"
                }
                h2 { class: "text-3xl font-black text-white truncate mb-2", "{track.title}" }
                p { class: "text-lg text-gray-400 truncate mb-6", "{track.author}" }
                div {
                    class: "h-2 w-full rounded-full bg-white/10 overflow-hidden",
                    div {
                        class: "h-full rounded-full bg-gradient-to-r from-cyan-400 to-sky-500 transition-all duration-1000",
                        style: "width: {progress}%",
                    }
                }
                div {
                    class: "flex justify-between mt-2 text-sm font-mono text-gray-500",
                    span { "{position}" }
                    span { "{duration}" }
                }
                div {
                    class: "flex flex-wrap gap-4 mt-6 text-sm font-bold text-gray-300",
                    div {
                        class: "flex items-center gap-2 px-4 py-2 rounded-full bg-white/5",
                        Icon { width: 14, height: 14, icon: FaVolumeHigh }
                        "{session.volume}%"
                    }
                    div {
                        class: "flex items-center gap-2 px-4 py-2 rounded-full bg-white/5",
                        Icon { width: 14, height: 14, icon: FaHeadphones }
                        "{listeners} Listening"
                    }
                }
            }
        }
    })
}

#[component]
fn TrackThumb(url: String) -> Element {
    if url.is_empty() {
        return rsx!(div {
            class: "w-12 h-12 rounded-lg bg-white/5 flex items-center justify-center text-gray-500",
            Icon { width: 18, height: 18, icon: FaMusic }
        });
    }

    rsx!(img { src: "{url}", alt: "", class: "w-12 h-12 rounded-lg object-cover" })
}

#[component]
fn RecentTrackRow(track: TrackStatDto) -> Element {
    rsx!(div {
        class: "flex items-center gap-4 p-3 rounded-2xl hover:bg-white/5 transition-colors",
        div {
            class: "relative",
            TrackThumb { url: track.thumbnail.clone().unwrap_or_default() }
            if track.is_playing {
                div { class: "absolute -top-1 -right-1 w-3 h-3 rounded-full bg-green-400 border-2 border-gray-950 animate-pulse" }
            }
        }
        div {
            class: "flex-1 min-w-0",
            h4 { class: "font-bold text-white truncate", "{track.title}" }
            p { class: "text-sm text-gray-500 truncate", "{track.author}" }
        }
        span { class: "text-gray-600", Icon { width: 12, height: 12, icon: FaChevronRight } }
    })
}

#[component]
fn TopTrackRow(rank: usize, track: TrackStatDto) -> Element {
    let medal = match rank {
        0 => "text-amber-400",
        1 => "text-gray-300",
        2 => "text-amber-600",
        _ => "text-gray-600",
    };

    rsx!(div {
        class: "flex items-center gap-4 p-3 rounded-2xl hover:bg-white/5 transition-colors",
        span { class: "w-8 text-center text-xl font-black tabular-nums {medal}", "{rank + 1}" }
        TrackThumb { url: track.thumbnail.clone().unwrap_or_default() }
        div {
            class: "flex-1 min-w-0",
            h4 { class: "font-bold text-white truncate", "{track.title}" }
            p { class: "text-sm text-gray-500 truncate", "{track.author}" }
        }
        span {
            class: "px-3 py-1 rounded-full text-xs font-bold text-cyan-300 bg-cyan-500/10",
            "{format_number(track.count)} plays"
        }
    })
}
