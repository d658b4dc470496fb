use dioxus::prelude::*;
use portfolio_core::{ClickTarget, PageController};

use crate::bridge::{dispatch_or_warn, run_scroll_bridge, BridgeCommand};
use crate::content::{nav_links, reveal_keys};
use crate::context::{get_page_config, start_page_load, ScrollPosition};
use crate::sections::{
    root_class, About, Contact, Footer, Hero, Navbar, Projects, ScrollTopButton, Skills, Toast,
};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Builds the page controller and provides it to every section, then starts
/// the scroll bridge on mount.
#[component]
pub fn App() -> Element {
    let mut page: Signal<PageController> = use_signal(|| {
        let mut controller = PageController::new(get_page_config(), nav_links());
        for key in reveal_keys() {
            controller.register_reveal(key);
        }
        tracing::debug!(candidates = controller.reveal().len(), "Page controller ready");
        controller
    });
    use_context_provider(|| page);
    let position = use_signal(|| 0.0);
    use_context_provider(|| ScrollPosition(position));

    // Scroll bridge for the page lifetime; it also starts the page-load
    // reveal when the window load frame arrives
    use_effect(move || {
        spawn(async move {
            if let Err(e) = run_scroll_bridge(page, position).await {
                tracing::warn!("Scroll bridge stopped, scroll effects disabled: {}", e);
                // Without load frames the hero would stay hidden
                if !page.peek().hero().is_loaded() {
                    page.write().on_load();
                    start_page_load(page);
                }
            }
        });
    });

    let loaded = page.read().hero().is_loaded();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: root_class(loaded),
            onclick: move |_| {
                // Only the menu and the hamburger stop propagation, so
                // anything that reaches the root landed outside both
                if !page.peek().menu().is_open() {
                    return;
                }
                let transition = page.write().on_page_click(ClickTarget::Elsewhere);
                if let Some(locked) = transition.and_then(|t| t.body_lock()) {
                    dispatch_or_warn(BridgeCommand::LockBody { locked });
                }
            },
            Navbar {}
            Hero {}
            About {}
            Projects {}
            Skills {}
            Contact {}
            Footer {}
            ScrollTopButton {}
            Toast {}
        }
    }
}
