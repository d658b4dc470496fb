//! Section title with an optional subtitle.

use dioxus::prelude::*;

#[component]
pub fn SectionHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
