//! Fixed navigation bar with the collapsible mobile menu.

use dioxus::prelude::*;
use portfolio_core::{ClickTarget, PageController};

use crate::bridge::{dispatch_or_warn, BridgeCommand};
use crate::context::use_page;

/// Scroll to a section and close the menu, as a navigation link click does.
pub fn follow_nav_link(mut page: Signal<PageController>, section_id: &str) {
    let Some(click) = page.write().on_nav_click(section_id) else {
        tracing::debug!(section_id, "Navigation target not on page");
        return;
    };
    dispatch_or_warn(BridgeCommand::ScrollTo { top: click.target });
    if let Some(locked) = click.menu.body_lock() {
        dispatch_or_warn(BridgeCommand::LockBody { locked });
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut page = use_page();

    let (scrolled, menu_open, links) = {
        let page = page.read();
        let links: Vec<(String, String, String, bool)> = page
            .nav()
            .links()
            .iter()
            .map(|link| {
                (
                    link.label.clone(),
                    link.href(),
                    link.section_id.clone(),
                    page.nav().is_active(&link.section_id),
                )
            })
            .collect();
        (page.chrome().navbar_scrolled, page.menu().is_open(), links)
    };

    let toggle_menu = move |evt: MouseEvent| {
        evt.stop_propagation();
        let transition = page.write().on_page_click(ClickTarget::Hamburger);
        if let Some(locked) = transition.and_then(|t| t.body_lock()) {
            dispatch_or_warn(BridgeCommand::LockBody { locked });
        }
    };

    rsx! {
        nav {
            id: "navbar",
            class: if scrolled { "navbar scrolled" } else { "navbar" },
            div { class: "nav-container",
                a {
                    class: "logo",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        follow_nav_link(page, "home");
                    },
                    "Portfolio"
                    span { class: "logo-dot", "." }
                }

                ul {
                    id: "navMenu",
                    class: if menu_open { "nav-menu active" } else { "nav-menu" },
                    // Clicks inside the menu never count as outside clicks
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    for (label, href, section_id, active) in links {
                        li { key: "{href}",
                            a {
                                class: if active { "nav-link active" } else { "nav-link" },
                                href: "{href}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    evt.stop_propagation();
                                    follow_nav_link(page, &section_id);
                                },
                                "{label}"
                            }
                        }
                    }
                }

                div {
                    id: "hamburger",
                    class: if menu_open { "hamburger active" } else { "hamburger" },
                    onclick: toggle_menu,
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
