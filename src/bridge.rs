//! Webview bridge.
//!
//! Page geometry only exists inside the webview, so a small script reports a
//! [`ScrollFrame`] on every scroll and resize and once on window load, and exposes
//! `window.__portfolio.apply(cmd)` for the few effects the virtual DOM cannot
//! express (animated scrolling, locking the body, opening files, registering
//! an offline worker).

use dioxus::document;
use dioxus::prelude::*;
use futures::StreamExt;
use portfolio_core::{debounce, PageController, PortfolioError, PortfolioResult, ScrollFrame};
use serde::Serialize;

use crate::context::start_page_load;

const BRIDGE_SCRIPT: &str = r#"
const revealSelector = __SELECTORS__.join(', ');

const frame = (cause) => ({
    cause,
    scroll_y: window.scrollY,
    viewport_height: window.innerHeight,
    sections: Array.from(document.querySelectorAll('section[id]')).map((s) => ({
        id: s.id,
        top: s.offsetTop,
        height: s.offsetHeight,
    })),
    reveal: revealSelector.length === 0 ? [] : Array.from(document.querySelectorAll(revealSelector))
        .filter((el) => el.id)
        .map((el) => {
            const rect = el.getBoundingClientRect();
            return { key: el.id, top: rect.top + window.scrollY, height: rect.height };
        }),
});

const report = (cause) => dioxus.send(frame(cause));

window.__portfolio = {
    async apply(cmd) {
        switch (cmd.type) {
            case 'scroll_to':
                window.scrollTo({ top: cmd.top, behavior: 'smooth' });
                break;
            case 'lock_body':
                document.body.style.overflow = cmd.locked ? 'hidden' : '';
                break;
            case 'open':
                if (!window.open(cmd.path, '_blank')) {
                    throw new Error('window.open refused ' + cmd.path);
                }
                break;
            case 'register_worker':
                if ('serviceWorker' in navigator) {
                    await navigator.serviceWorker.register(cmd.script);
                }
                break;
        }
    },
};

window.addEventListener('scroll', () => report('scroll'), { passive: true });
window.addEventListener('resize', () => report('resize'));
report('scroll');
if (document.readyState === 'complete') {
    report('load');
} else {
    window.addEventListener('load', () => report('load'), { once: true });
}

await new Promise(() => {});
"#;

/// Effects carried out by the webview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeCommand {
    /// Smooth scroll to a document offset
    ScrollTo { top: f64 },
    /// Suppress or restore page scrolling
    LockBody { locked: bool },
    /// Open a file or URL in a new window
    Open { path: String },
    /// Register an offline-caching service worker
    RegisterWorker { script: String },
}

/// Build the bridge script for the given reveal selectors.
pub fn bridge_script(selectors: &[String]) -> PortfolioResult<String> {
    let selectors = serde_json::to_string(selectors)?;
    Ok(BRIDGE_SCRIPT.replace("__SELECTORS__", &selectors))
}

/// Script that applies `command` and resolves to whether the bridge was
/// installed. Exceptions thrown while applying reject the eval.
pub fn command_script(command: &BridgeCommand) -> PortfolioResult<String> {
    let payload = serde_json::to_string(command)?;
    Ok(format!(
        "if (!window.__portfolio) {{ return false; }}\nawait window.__portfolio.apply({});\nreturn true;",
        payload
    ))
}

/// Run a command in the webview.
///
/// The command is carried out in the background; failures on the webview side
/// are logged when they come back.
pub fn dispatch(command: BridgeCommand) -> PortfolioResult<()> {
    let script = command_script(&command)?;
    tracing::trace!(%script, "Bridge command");
    spawn(async move {
        match document::eval(&script).join::<bool>().await {
            Ok(true) => {}
            Ok(false) => tracing::warn!(?command, "Bridge not installed, command dropped"),
            Err(e) => tracing::warn!(?command, "Bridge command failed: {:?}", e),
        }
    });
    Ok(())
}

/// Dispatch and log failures; bridge effects are never fatal.
pub fn dispatch_or_warn(command: BridgeCommand) {
    if let Err(e) = dispatch(command) {
        tracing::warn!("Bridge command not sent: {}", e);
    }
}

/// Feed scroll frames from the webview into the controller until the bridge
/// closes.
///
/// Frames that leave the page state untouched only move `position`, so the
/// rest of the page does not re-render while scrolling. The active link is
/// recomputed once more when scrolling settles.
pub async fn run_scroll_bridge(
    mut page: Signal<PageController>,
    mut position: Signal<f64>,
) -> PortfolioResult<()> {
    let (script, wait) = {
        let page = page.peek();
        let config = page.config();
        (
            bridge_script(&config.reveal.selectors)?,
            config.scroll.debounce(),
        )
    };

    let (settled_tx, mut settled_rx) = futures::channel::mpsc::unbounded::<ScrollFrame>();
    let settle = debounce(wait, move |frame: ScrollFrame| {
        let _ = settled_tx.unbounded_send(frame);
    });

    spawn(async move {
        while let Some(frame) = settled_rx.next().await {
            if page.peek().nav().would_change(&frame.sections, frame.scroll_y) {
                page.write().refresh_active(&frame);
            }
        }
    });

    let mut eval = document::eval(&script);
    loop {
        let frame = eval
            .recv::<ScrollFrame>()
            .await
            .map_err(|e| PortfolioError::Bridge(format!("{:?}", e)))?;
        position.set(frame.scroll_y);
        if !page.peek().is_quiet(&frame) {
            let effects = page.write().on_scroll(&frame);
            if effects.page_loaded {
                start_page_load(page);
            }
        }
        settle.call(frame);
    }
}
