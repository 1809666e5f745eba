use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "pt-32 pb-12 px-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn Spinner(class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or("w-8 h-8");

    rsx!(span {
        class: "loading loading-spinner inline-block rounded-full border-2 border-cyan-400 border-t-transparent animate-spin {class}",
    })
}

/// Dashed placeholder card for lists that came back empty.
#[component]
pub fn EmptyState(message: &'static str, children: Element) -> Element {
    rsx!(div {
        class: "flex flex-col items-center justify-center gap-3 p-12 rounded-3xl border border-dashed border-white/10 bg-white/5 text-center text-gray-400",
        {children}
        p {
            class: "font-medium",
            "{message}"
        }
    })
}
