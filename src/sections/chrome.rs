//! Notification toast, scroll-to-top button and footer.

use dioxus::prelude::*;
use portfolio_core::footer::{current_year, FooterText};
use portfolio_core::Notification;
use portfolio_ui::{class_list, Button, ButtonVariant};

use crate::bridge::{dispatch_or_warn, BridgeCommand};
use crate::context::use_page;

/// The single notification node, when one is showing.
///
/// Keyed by notification id so a replacement is a fresh node that plays its
/// entrance animation, even when it looks exactly like the one it evicts.
#[component]
pub fn Toast() -> Element {
    let page = use_page();
    let note = page.read().notification().cloned();

    rsx! {
        for note in note {
            div {
                key: "{note.id}",
                class: note.class(),
                style: toast_style(&note),
                div { class: "notification-content",
                    i { class: format!("fas fa-{}", note.kind.icon()) }
                    span { "{note.message}" }
                }
            }
        }
    }
}

fn toast_style(note: &Notification) -> String {
    format!(
        "background: {}; animation: {};",
        note.kind.color(),
        note.animation()
    )
}

#[component]
pub fn ScrollTopButton() -> Element {
    let page = use_page();
    let visible = page.read().chrome().scroll_top_visible;

    rsx! {
        Button {
            variant: ButtonVariant::Scroll,
            id: "scrollTop".to_string(),
            class: if visible { "visible".to_string() } else { String::new() },
            aria_label: "Scroll to top".to_string(),
            onclick: move |_| {
                let top = page.peek().on_scroll_top();
                dispatch_or_warn(BridgeCommand::ScrollTo { top });
            },
            i { class: "fas fa-arrow-up" }
        }
    }
}

/// Footer; the year is taken once when the footer first renders.
#[component]
pub fn Footer() -> Element {
    let page = use_page();
    let text = use_hook(|| FooterText::new(current_year(), &page.peek().config().profile));

    rsx! {
        footer { class: "footer",
            p { class: "footer-text",
                "{text.before_heart} "
                i { class: "fas fa-heart" }
                " {text.after_heart}"
            }
        }
    }
}

/// Class for the page root once the load reveal has started.
pub fn root_class(loaded: bool) -> String {
    class_list("page", loaded.then_some("loaded"))
}
