//! Page-load reveal of the hero section.
//!
//! When the page finishes loading the root is marked `loaded`, then the hero
//! content and the hero illustration slide in after their own delays. Both
//! delays count from the load event, not from each other.

use std::time::Duration;

use crate::config::HeroConfig;

/// Parts of the hero revealed after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPart {
    Content,
    Illustration,
}

/// Reveal progress of the hero section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroReveal {
    loaded: bool,
    content: bool,
    illustration: bool,
}

impl HeroReveal {
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn reveal(&mut self, part: HeroPart) {
        match part {
            HeroPart::Content => self.content = true,
            HeroPart::Illustration => self.illustration = true,
        }
    }

    pub fn is_revealed(&self, part: HeroPart) -> bool {
        match part {
            HeroPart::Content => self.content,
            HeroPart::Illustration => self.illustration,
        }
    }

    /// Inline style for a part: hidden and offset until revealed.
    pub fn style(&self, part: HeroPart) -> &'static str {
        match (part, self.is_revealed(part)) {
            (HeroPart::Content, true) => "opacity: 1; transform: translateY(0);",
            (HeroPart::Content, false) => "opacity: 0; transform: translateY(30px);",
            (HeroPart::Illustration, true) => "opacity: 1; transform: translateX(0);",
            (HeroPart::Illustration, false) => "opacity: 0; transform: translateX(30px);",
        }
    }
}

/// Reveal schedule ordered by delay.
pub fn schedule(config: &HeroConfig) -> Vec<(Duration, HeroPart)> {
    let mut steps = vec![
        (Duration::from_millis(config.content_delay_ms), HeroPart::Content),
        (
            Duration::from_millis(config.illustration_delay_ms),
            HeroPart::Illustration,
        ),
    ];
    steps.sort_by_key(|(delay, _)| *delay);
    steps
}

/// Run the reveal timers, starting now.
pub async fn run_page_load<F>(config: &HeroConfig, mut on_reveal: F)
where
    F: FnMut(HeroPart),
{
    let start = tokio::time::Instant::now();
    for (delay, part) in schedule(config) {
        tokio::time::sleep_until(start + delay).await;
        on_reveal(part);
    }
}
