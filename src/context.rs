//! Page context for the portfolio.
//!
//! Provides the single [`PageController`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(PageController::new(config, links)));
//!
//! // In child components
//! let mut page = use_page();
//! page.write().on_hamburger();
//! ```

use dioxus::prelude::*;
use portfolio_core::hero::run_page_load;
use portfolio_core::notify::run_lifecycle;
use portfolio_core::{NotificationId, PageConfig, PageController};

use crate::bridge::{dispatch_or_warn, BridgeCommand};

/// Live vertical scroll offset, kept apart from the controller so that
/// parallax updates only re-render the hero.
#[derive(Clone, Copy)]
pub struct ScrollPosition(pub Signal<f64>);

/// Get the page configuration (set from command line args).
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the page controller from context.
pub fn use_page() -> Signal<PageController> {
    use_context::<Signal<PageController>>()
}

/// Hook to access the live scroll offset from context.
pub fn use_scroll_position() -> Signal<f64> {
    use_context::<ScrollPosition>().0
}

/// Begin the page-load reveal once the window has loaded: register the
/// offline worker when enabled and stagger the hero in.
pub fn start_page_load(mut page: Signal<PageController>) {
    let (hero, worker) = {
        let page = page.peek();
        (
            page.config().hero.clone(),
            page.offline_worker().map(str::to_string),
        )
    };
    tracing::debug!("Window loaded, revealing hero");
    if let Some(script) = worker {
        dispatch_or_warn(BridgeCommand::RegisterWorker { script });
    }
    spawn(async move {
        run_page_load(&hero, move |part| page.write().reveal_hero(part)).await;
    });
}

/// Start the display/exit/remove timers of a freshly shown notification.
///
/// Timers of a notification that has since been replaced act on nothing.
pub fn spawn_notification_timers(mut page: Signal<PageController>, id: NotificationId) {
    let lifecycle = page.peek().notification_lifecycle();
    spawn(async move {
        run_lifecycle(id, lifecycle, move |id, stage| {
            page.write().apply_notification_stage(id, stage);
        })
        .await;
    });
}
