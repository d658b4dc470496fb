//! Page configuration.
//!
//! Every tunable of the page behavior lives here, with `Default` carrying the
//! values the page ships with. A JSON file may override any subset of fields:
//!
//! ```json
//! {
//!   "scroll": { "header_offset": 64.0 },
//!   "features": { "typing_effect": true }
//! }
//! ```
//!
//! Features that are normally disabled (typing effect, offline worker,
//! résumé download) are explicit flags in [`FeatureFlags`] rather than
//! dormant code paths.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Top-level configuration for the portfolio page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub profile: Profile,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub notification: NotificationConfig,
    pub parallax: ParallaxConfig,
    pub hero: HeroConfig,
    pub typing: TypingConfig,
    pub features: FeatureFlags,
}

impl PageConfig {
    /// Load a configuration file, filling unspecified fields with defaults.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: PageConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded page config");
        Ok(config)
    }

    /// Reject values that would make the page misbehave.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(PortfolioError::Config(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        if self.scroll.header_offset < 0.0 || self.scroll.probe_offset < 0.0 {
            return Err(PortfolioError::Config(
                "scroll offsets must not be negative".to_string(),
            ));
        }
        if self.features.offline_worker && self.features.worker_script.trim().is_empty() {
            return Err(PortfolioError::Config(
                "features.worker_script is required when offline_worker is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Who the portfolio belongs to; feeds the footer and the console banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Owner's display name
    pub owner: String,
    /// What the page was built with, shown in the footer attribution
    pub built_with: String,
    /// Tagline printed with the console banner
    pub tagline: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner: "Neelakantam Shiva Ram Prasad".to_string(),
            built_with: "Rust & Dioxus".to_string(),
            tagline: "Looking for opportunities in UI/UX Design!".to_string(),
        }
    }
}

/// Scroll-driven thresholds and offsets, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Navbar gets the `scrolled` class past this offset
    pub navbar_threshold: f64,
    /// Scroll-to-top button becomes visible past this offset
    pub scroll_top_threshold: f64,
    /// Added to `scrollY` to form the active-section probe point
    pub probe_offset: f64,
    /// Fixed header height subtracted from a section's top on nav click
    pub header_offset: f64,
    /// Debounce window for the trailing nav-highlight recomputation
    pub debounce_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            scroll_top_threshold: 300.0,
            probe_offset: 100.0,
            header_offset: 80.0,
            debounce_ms: 100,
        }
    }
}

impl ScrollConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Fade-in reveal trigger, mirroring an intersection observer's options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction at which a candidate is revealed
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport trigger region
    pub bottom_margin: f64,
    /// Class-name selectors whose elements become reveal candidates
    pub selectors: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
            selectors: vec![
                ".about-content".to_string(),
                ".project-card".to_string(),
                ".skill-card".to_string(),
                ".contact-content".to_string(),
            ],
        }
    }
}

/// Toast lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Time on screen before the exit transition starts
    pub display_ms: u64,
    /// Length of the exit transition before removal
    pub exit_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: 4000,
            exit_ms: 300,
        }
    }
}

impl NotificationConfig {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

/// Floating shape speeds: `base + step * index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub base_speed: f64,
    pub speed_step: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            speed_step: 0.1,
        }
    }
}

/// Staggered hero reveal after page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub content_delay_ms: u64,
    pub illustration_delay_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            content_delay_ms: 100,
            illustration_delay_ms: 300,
        }
    }
}

/// Subtitle typing effect pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u64,
    pub char_interval_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            char_interval_ms: 30,
        }
    }
}

/// Optional behaviors, all off unless explicitly enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Type the hero subtitle out character by character
    pub typing_effect: bool,
    /// Register an offline-caching service worker on load
    pub offline_worker: bool,
    /// Script registered when `offline_worker` is on
    pub worker_script: String,
    /// Wire the résumé button to a download
    pub resume_download: bool,
    /// Résumé asset; the button shows a placeholder notice when unset
    pub resume_path: Option<String>,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            typing_effect: false,
            offline_worker: false,
            worker_script: "/sw.js".to_string(),
            resume_download: false,
            resume_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_page() {
        let config = PageConfig::default();
        assert_eq!(config.scroll.header_offset, 80.0);
        assert_eq!(config.scroll.probe_offset, 100.0);
        assert_eq!(config.scroll.debounce(), Duration::from_millis(100));
        assert_eq!(config.notification.display(), Duration::from_millis(4000));
        assert_eq!(config.notification.exit(), Duration::from_millis(300));
        assert_eq!(config.reveal.selectors.len(), 4);
        assert!(!config.features.typing_effect);
        assert!(!config.features.offline_worker);
        assert!(!config.features.resume_download);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{ "scroll": { "header_offset": 64.0 } }"#).unwrap();
        assert_eq!(config.scroll.header_offset, 64.0);
        assert_eq!(config.scroll.navbar_threshold, 50.0);
        assert_eq!(config.parallax, ParallaxConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = PageConfig::default();
        config.reveal.threshold = 1.5;
        assert!(matches!(config.validate(), Err(PortfolioError::Config(_))));
    }

    #[test]
    fn test_validate_requires_worker_script() {
        let mut config = PageConfig::default();
        config.features.offline_worker = true;
        config.features.worker_script = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
