//! Scroll tracking and navigation highlighting.
//!
//! The webview reports page geometry as a [`ScrollFrame`]. From it the
//! [`NavTracker`] decides which navigation link is active: the link whose
//! section contains the probe point `scroll_y + probe_offset`. When the probe
//! point falls outside every section, no link is active.

use serde::{Deserialize, Serialize};

use crate::config::ScrollConfig;

/// Document-relative vertical span of a `section[id]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Document-relative rect of a fade-in candidate, keyed by its element id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub key: String,
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(key: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            key: key.into(),
            top,
            height,
        }
    }
}

/// Window event that produced a [`ScrollFrame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameCause {
    #[default]
    Scroll,
    Resize,
    /// The window finished loading
    Load,
}

/// Snapshot of page geometry sent by the webview on scroll, resize and load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollFrame {
    #[serde(default)]
    pub cause: FrameCause,
    pub scroll_y: f64,
    pub viewport_height: f64,
    #[serde(default)]
    pub sections: Vec<SectionBounds>,
    #[serde(default)]
    pub reveal: Vec<ElementRect>,
}

/// A navigation entry pointing at `#section_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub section_id: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            section_id: section_id.into(),
        }
    }

    /// Build a link from an anchor `href` such as `#about`.
    pub fn from_href(label: impl Into<String>, href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        Some(Self::new(label, id))
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

/// Find the section containing the probe point.
///
/// Sections are scanned in document order; if spans overlap the last match
/// wins.
pub fn section_at(sections: &[SectionBounds], probe: f64) -> Option<&SectionBounds> {
    sections.iter().rev().find(|section| section.contains(probe))
}

/// Navbar and scroll-to-top button state for a scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    /// Navbar carries the `scrolled` class
    pub navbar_scrolled: bool,
    /// Scroll-to-top button carries the `visible` class
    pub scroll_top_visible: bool,
}

impl ScrollChrome {
    pub fn at(scroll_y: f64, config: &ScrollConfig) -> Self {
        Self {
            navbar_scrolled: scroll_y > config.navbar_threshold,
            scroll_top_visible: scroll_y > config.scroll_top_threshold,
        }
    }
}

/// Tracks which navigation link is active.
#[derive(Debug, Clone)]
pub struct NavTracker {
    links: Vec<NavLink>,
    active: Option<usize>,
    probe_offset: f64,
    header_offset: f64,
}

impl NavTracker {
    pub fn new(links: Vec<NavLink>, config: &ScrollConfig) -> Self {
        Self {
            links,
            active: None,
            probe_offset: config.probe_offset,
            header_offset: config.header_offset,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// The currently highlighted link, if any.
    pub fn active_link(&self) -> Option<&NavLink> {
        self.active.and_then(|idx| self.links.get(idx))
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_link()
            .is_some_and(|link| link.section_id == section_id)
    }

    /// Recompute the active link. Returns `true` when it changed.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64) -> bool {
        let next = self.resolve(sections, scroll_y);
        if next == self.active {
            return false;
        }
        self.active = next;
        tracing::trace!(
            active = ?self.active_link().map(|l| l.section_id.as_str()),
            scroll_y,
            "Active nav link changed"
        );
        true
    }

    /// Whether [`update`](Self::update) would change the active link.
    pub fn would_change(&self, sections: &[SectionBounds], scroll_y: f64) -> bool {
        self.resolve(sections, scroll_y) != self.active
    }

    fn resolve(&self, sections: &[SectionBounds], scroll_y: f64) -> Option<usize> {
        let probe = scroll_y + self.probe_offset;
        section_at(sections, probe).and_then(|section| {
            self.links
                .iter()
                .position(|link| link.section_id == section.id)
        })
    }

    /// Offset to scroll to when `section_id` is clicked: the section's top
    /// minus the fixed header height, never above the document start.
    ///
    /// Returns `None` for unknown sections.
    pub fn scroll_target(&self, sections: &[SectionBounds], section_id: &str) -> Option<f64> {
        sections
            .iter()
            .find(|section| section.id == section_id)
            .map(|section| (section.top - self.header_offset).max(0.0))
    }
}
