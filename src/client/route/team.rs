use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::FaDiscord,
        fa_solid_icons::{FaMicrochip, FaShieldHalved, FaUsers},
    },
    Icon,
};

use crate::client::{
    component::Page,
    constant::{SITE_NAME, SUPPORT_URL},
};

#[cfg(feature = "web")]
use crate::client::api::user::get_user_avatar;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TeamMember {
    name: &'static str,
    role: &'static str,
    description: &'static str,
    discord_id: &'static str,
}

const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Nobita",
        role: "Bot Owner",
        description: "Visionary creator and primary owner of the Flixo platform core.",
        discord_id: "1380026050104397825",
    },
    TeamMember {
        name: "ANsh4Real",
        role: "Co Dev and Co Ownz",
        description: "Co-Developer and infrastructure co-owner behind Flixo's high-performance backend.",
        discord_id: "1383706658315960330",
    },
];

#[component]
pub fn Team() -> Element {
    let avatars = use_signal(HashMap::<&'static str, String>::new);

    // Members are looked up one after another; each answer shows up as it lands.
    #[cfg(feature = "web")]
    {
        let mut avatars = avatars;
        use_hook(move || {
            spawn(async move {
                for member in TEAM {
                    match get_user_avatar(member.discord_id).await {
                        Ok(dto) => {
                            if let Some(url) = dto.avatar_url.filter(|url| !url.is_empty()) {
                                avatars.write().insert(member.discord_id, url);
                            }
                        }
                        Err(err) => {
                            tracing::warn!("Failed to fetch avatar for {}: {}", member.discord_id, err);
                        }
                    }
                }
            })
        });
    }

    rsx! {
        Title { "Team | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-5xl",
                div {
                    class: "text-center mb-16",
                    div {
                        class: "inline-flex p-4 mb-6 rounded-2xl bg-cyan-500/10 border border-cyan-500/20 text-cyan-400",
                        Icon { width: 32, height: 32, icon: FaUsers }
                    }
                    h1 {
                        class: "text-5xl md:text-6xl font-black text-white mb-4",
                        "The "
                        span { class: "text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500", "Developers" }
                    }
                    p {
                        class: "max-w-2xl mx-auto text-gray-400 text-lg",
                        "Meet the engineers behind the streams that keep your servers listening."
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    for member in TEAM {
                        MemberCard {
                            key: "{member.discord_id}",
                            avatar: avatars.read().get(member.discord_id).cloned().unwrap_or_default(),
                            member,
                        }
                    }
                }

                div {
                    class: "mt-20 p-10 md:p-12 rounded-3xl text-center bg-gradient-to-r from-cyan-900/20 to-sky-900/20 border border-cyan-500/20",
                    div {
                        class: "inline-flex mb-6 text-cyan-500 opacity-60",
                        Icon { width: 48, height: 48, icon: FaMicrochip }
                    }
                    h3 { class: "text-3xl font-black text-white mb-4", "Want to contribute?" }
                    p {
                        class: "max-w-xl mx-auto mb-8 text-gray-400",
                        "Join our community Discord and talk to the developers. Feedback, bug reports and feature ideas are always welcome."
                    }
                    a {
                        href: SUPPORT_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "inline-flex items-center gap-2 px-8 py-4 rounded-full font-bold text-white bg-cyan-500 hover:bg-cyan-600 transition-colors",
                        Icon { width: 18, height: 18, icon: FaDiscord }
                        "Join Discord Official"
                    }
                }
            }
        }
    }
}

#[component]
fn MemberCard(member: TeamMember, avatar: String) -> Element {
    rsx!(div {
        class: "p-8 rounded-3xl bg-white/5 border border-white/10 hover:border-cyan-500/30 transition-colors",
        div {
            class: "flex items-center gap-5 mb-6",
            div {
                class: "w-20 h-20 shrink-0 rounded-full overflow-hidden flex items-center justify-center bg-gradient-to-br from-cyan-600 to-sky-800 text-white",
                if avatar.is_empty() {
                    Icon { width: 32, height: 32, icon: FaShieldHalved }
                } else {
                    img { src: "{avatar}", alt: "{member.name}", class: "w-full h-full object-cover" }
                }
            }
            div {
                class: "min-w-0",
                h3 { class: "text-2xl font-bold text-white truncate", title: "{member.name}", "{member.name}" }
                p { class: "text-sm font-bold uppercase tracking-widest text-cyan-400", "{member.role}" }
            }
        }
        p { class: "mb-6 text-gray-400 leading-relaxed", "{member.description}" }
        a {
            href: SUPPORT_URL,
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "Contact {member.name} on Discord",
            class: "inline-flex p-3 rounded-full bg-white/5 text-gray-300 hover:bg-[#5865F2] hover:text-white transition-colors",
            Icon { width: 18, height: 18, icon: FaDiscord }
        }
    })
}
