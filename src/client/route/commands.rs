use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCheck, FaCopy, FaMagnifyingGlass, FaTerminal, FaWandMagicSparkles},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{EmptyState, Page, Spinner},
        model::{
            cache::Cache,
            catalog::{categories, filter_commands, ALL_CATEGORIES},
        },
    },
    model::command::CommandDto,
};

#[cfg(feature = "web")]
use crate::client::{api::command::get_commands, constant::COPY_FEEDBACK_MS, hook::use_poll};
#[cfg(feature = "web")]
use gloo_timers::future::TimeoutFuture;

const COPY_SCRIPT: &str = r#"
    const text = await dioxus.recv();
    await navigator.clipboard.writeText(text);
"#;

#[component]
pub fn Commands() -> Element {
    let commands = use_signal(|| Cache::<Vec<CommandDto>>::NotFetched);
    let mut search = use_signal(String::new);
    let mut active_category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut copied = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_poll(commands, None, get_commands, Cache::or_default);

    let copy = move |invocation: String| {
        spawn(async move {
            let eval = document::eval(COPY_SCRIPT);
            if let Err(err) = eval.send(invocation.clone()) {
                tracing::warn!("Failed to copy {} to clipboard: {:?}", invocation, err);
                return;
            }
            copied.set(Some(invocation.clone()));

            #[cfg(feature = "web")]
            {
                TimeoutFuture::new(COPY_FEEDBACK_MS).await;
            }

            // A later copy owns the indicator now.
            if copied.peek().as_deref() == Some(invocation.as_str()) {
                copied.set(None);
            }
        });
    };

    let catalog = commands.read().data().cloned().unwrap_or_default();
    let tabs = categories(&catalog);
    let query = search();
    let category = active_category();
    let matches = filter_commands(&catalog, &query, &category);
    let copied_now = copied();

    rsx! {
        Title { "Commands | Flixo" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-7xl",
                div {
                    class: "text-center mb-12",
                    h1 {
                        class: "text-5xl md:text-6xl font-black text-white mb-4",
                        "Command "
                        span { class: "text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500", "Explorer" }
                    }
                    p { class: "text-gray-400 text-lg", "Discover and execute powerful features seamlessly." }
                }

                div {
                    class: "rounded-3xl bg-black/40 border border-white/10 backdrop-blur-xl shadow-2xl overflow-hidden",
                    div {
                        class: "flex items-center justify-between px-6 py-4 border-b border-white/5 bg-white/5",
                        div {
                            class: "flex gap-2",
                            div { class: "w-3 h-3 rounded-full bg-red-500/80" }
                            div { class: "w-3 h-3 rounded-full bg-yellow-500/80" }
                            div { class: "w-3 h-3 rounded-full bg-green-500/80" }
                        }
                        div {
                            class: "flex items-center gap-2 text-xs font-bold uppercase tracking-widest text-gray-500",
                            Icon { width: 12, height: 12, icon: FaWandMagicSparkles }
                            "CLI Reference"
                        }
                        div { class: "w-12" }
                    }

                    div {
                        class: "p-6 md:p-8",
                        label {
                            class: "relative flex items-center mb-6",
                            span {
                                class: "absolute left-5 text-gray-500",
                                Icon { width: 18, height: 18, icon: FaMagnifyingGlass }
                            }
                            input {
                                r#type: "text",
                                placeholder: "Search for a command...",
                                class: "w-full pl-14 pr-5 py-4 rounded-2xl bg-white/5 border border-white/10 text-white placeholder-gray-500 focus:outline-none focus:border-cyan-500/50",
                                value: "{query}",
                                oninput: move |event| search.set(event.value()),
                            }
                        }

                        div {
                            class: "flex flex-wrap gap-2 mb-8",
                            for tab in tabs {
                                button {
                                    key: "{tab}",
                                    class: "px-4 py-2 rounded-full text-sm font-bold capitalize transition-all duration-300",
                                    class: if tab == category {
                                        "bg-gradient-to-r from-cyan-500 to-sky-600 text-white shadow-lg shadow-cyan-500/25"
                                    } else {
                                        "bg-white/5 border border-white/10 text-gray-400 hover:bg-white/10 hover:text-white"
                                    },
                                    onclick: {
                                        let tab = tab.clone();
                                        move |_| active_category.set(tab.clone())
                                    },
                                    "{tab}"
                                }
                            }
                        }

                        if commands.read().is_pending() {
                            div {
                                class: "flex flex-col items-center gap-4 py-20 text-gray-400",
                                Spinner {}
                                "Syncing Index..."
                            }
                        } else if catalog.is_empty() {
                            EmptyState {
                                message: "No commands indexed or API is offline.",
                                span { class: "text-gray-600", Icon { width: 32, height: 32, icon: FaTerminal } }
                            }
                        } else {
                            p {
                                class: "mb-4 text-sm text-gray-500",
                                "Showing {matches.len()} of {catalog.len()} commands"
                            }
                            if matches.is_empty() {
                                div {
                                    class: "py-16 text-center text-gray-400",
                                    "No commands found matching \""
                                    span { class: "text-cyan-400", "{query}" }
                                    "\""
                                }
                            } else {
                                div {
                                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4",
                                    for command in matches {
                                        CommandCard {
                                            key: "{command.name}",
                                            copied: copied_now.as_deref() == Some(command.invocation().as_str()),
                                            command: command.clone(),
                                            on_copy: copy,
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
}

#[component]
fn CommandCard(command: CommandDto, copied: bool, on_copy: EventHandler<String>) -> Element {
    let invocation = command.invocation();

    rsx!(div {
        class: "flex flex-col justify-between gap-4 p-5 rounded-2xl bg-white/5 border border-white/5 hover:border-cyan-500/30 transition-colors",
        div {
            h3 {
                class: "text-lg font-bold text-white mb-2",
                span { class: "text-cyan-400", "/" }
                "{command.name}"
            }
            p { class: "text-sm text-gray-400 leading-relaxed", "{command.description()}" }
        }
        button {
            class: "w-full flex items-center justify-center gap-2 px-4 py-2 rounded-xl text-xs font-bold transition-all",
            class: if copied {
                "bg-green-500/20 text-green-400 border border-green-500/30"
            } else {
                "bg-white/5 text-gray-400 border border-white/10 hover:bg-cyan-500/20 hover:text-cyan-400"
            },
            onclick: move |_| on_copy.call(invocation.clone()),
            if copied {
                Icon { width: 12, height: 12, icon: FaCheck }
                "Copied"
            } else {
                Icon { width: 12, height: 12, icon: FaCopy }
                "Copy Cmd"
            }
        }
    })
}
