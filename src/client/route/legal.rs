use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaLock, FaScaleBalanced},
    Icon,
};
use pulldown_cmark::{html, Options, Parser};

use crate::client::{component::Page, constant::SITE_NAME};

const TERMS_MARKDOWN: &str = include_str!("../../../content/terms.md");
const PRIVACY_MARKDOWN: &str = include_str!("../../../content/privacy.md");

/// Renders bundled Markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn Terms() -> Element {
    rsx! {
        Title { "Terms of Service | {SITE_NAME}" }
        LegalDocument {
            title: "Terms of",
            highlight: "Service",
            markdown: TERMS_MARKDOWN,
            Icon { width: 32, height: 32, icon: FaScaleBalanced }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        Title { "Privacy Policy | {SITE_NAME}" }
        LegalDocument {
            title: "Privacy",
            highlight: "Policy",
            markdown: PRIVACY_MARKDOWN,
            Icon { width: 32, height: 32, icon: FaLock }
        }
    }
}

#[component]
fn LegalDocument(
    title: &'static str,
    highlight: &'static str,
    markdown: &'static str,
    children: Element,
) -> Element {
    let body = use_hook(|| render_markdown(markdown));
    let updated = Utc::now().format("%B %-d, %Y").to_string();

    rsx! {
        Page {
            class: "flex justify-center",
            div {
                class: "w-full max-w-4xl",
                div {
                    class: "text-center mb-12",
                    div {
                        class: "inline-flex p-4 mb-6 rounded-2xl bg-cyan-500/10 border border-cyan-500/20 text-cyan-400",
                        {children}
                    }
                    h1 {
                        class: "text-5xl md:text-6xl font-black text-white mb-4",
                        "{title} "
                        span { class: "text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-sky-500", "{highlight}" }
                    }
                    p { class: "text-gray-500", "Last updated: {updated}" }
                }
                article {
                    class: "legal p-8 md:p-12 rounded-3xl bg-white/5 border border-white/10",
                    dangerous_inner_html: "{body}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_lists() {
        let out = render_markdown("## Usage\n\n- one\n- two\n");

        assert!(out.contains("<h2>Usage</h2>"));
        assert!(out.contains("<li>one</li>"));
    }

    #[test]
    fn bundled_documents_render() {
        let terms = render_markdown(TERMS_MARKDOWN);
        let privacy = render_markdown(PRIVACY_MARKDOWN);

        assert!(terms.contains("Acceptance of Terms"));
        assert!(privacy.contains("<strong>Server Data:</strong>"));
    }
}
