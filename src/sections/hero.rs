//! Hero section: greeting, call-to-action buttons and floating shapes.

use dioxus::prelude::*;
use portfolio_core::parallax::shape_transform;
use portfolio_core::typing::run_typing;
use portfolio_core::{HeroPart, ResumeAction};
use portfolio_ui::{Button, ButtonVariant};

use crate::bridge::{dispatch_or_warn, BridgeCommand};
use crate::content::FLOATING_SHAPES;
use crate::context::{spawn_notification_timers, use_page, use_scroll_position};
use crate::sections::navbar::follow_nav_link;

const SUBTITLE: &str =
    "I design clean, human-centered interfaces and turn research into products people enjoy using.";

#[component]
pub fn Hero() -> Element {
    let mut page = use_page();
    let position = use_scroll_position();
    // None renders the full subtitle
    let mut typed: Signal<Option<String>> = use_signal(|| None);

    use_effect(move || {
        let (enabled, typing) = {
            let page = page.peek();
            (page.typing_enabled(), page.config().typing.clone())
        };
        if enabled {
            spawn(async move {
                run_typing(SUBTITLE, &typing, move |frame| typed.set(Some(frame))).await;
            });
        }
    });

    let on_resume = move |_| {
        let action = page.write().on_resume_click();
        match action {
            ResumeAction::Inert => {}
            ResumeAction::Open(path) => dispatch_or_warn(BridgeCommand::Open { path }),
            ResumeAction::Notice(id) => spawn_notification_timers(page, id),
        }
    };

    let scroll_y = position();
    let (content_style, illustration_style, transforms) = {
        let page = page.read();
        let transforms: Vec<String> = (0..FLOATING_SHAPES)
            .map(|i| shape_transform(i, scroll_y, &page.config().parallax))
            .collect();
        (
            page.hero().style(HeroPart::Content),
            page.hero().style(HeroPart::Illustration),
            transforms,
        )
    };
    let subtitle = typed().unwrap_or_else(|| SUBTITLE.to_string());

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-shapes",
                for (index, transform) in transforms.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "floating-shape shape-{index}",
                        style: "transform: {transform};",
                    }
                }
            }

            div { class: "hero-container",
                div { class: "hero-content", style: content_style,
                    p { class: "hero-greeting", "Hello, I'm" }
                    h1 { class: "hero-title",
                        "Neelakantam "
                        span { class: "highlight", "Shiva Ram Prasad" }
                    }
                    p { class: "hero-subtitle", "{subtitle}" }
                    div { class: "hero-buttons",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| follow_nav_link(page, "projects"),
                            "View My Work"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            id: "resumeBtn".to_string(),
                            onclick: on_resume,
                            i { class: "fas fa-download" }
                            " Download Resume"
                        }
                    }
                }

                div { class: "hero-illustration", style: illustration_style,
                    div { class: "illustration-card",
                        i { class: "fas fa-pen-nib" }
                    }
                }
            }
        }
    }
}
