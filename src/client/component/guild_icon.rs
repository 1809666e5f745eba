use dioxus::prelude::*;

use crate::model::guild::GuildSummaryDto;

/// Guild icon, or the guild's initial on a tinted tile when it has none.
#[component]
pub fn GuildIcon(guild: GuildSummaryDto, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or("w-12 h-12 text-xl");

    match guild.icon.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => rsx!(img {
            src: "{url}",
            alt: "{guild.name}",
            class: "rounded-full object-cover border-2 border-white/10 {class}",
        }),
        None => rsx!(div {
            class: "rounded-full flex items-center justify-center font-black text-white bg-gradient-to-br from-cyan-600 to-sky-800 border-2 border-white/10 {class}",
            "{guild.initial()}"
        }),
    }
}
