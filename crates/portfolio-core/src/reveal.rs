//! One-way fade-in reveal.
//!
//! Candidates are tagged `fade-in` when registered. Each scroll frame their
//! rects are tested against the viewport, shrunk at the bottom by
//! `bottom_margin`, the same way an intersection observer with
//! `rootMargin: 0 0 -50px 0` would. Once a candidate's visible fraction
//! reaches `threshold` it gains `visible` and keeps it for the rest of the
//! page lifetime.

use std::collections::HashMap;

use crate::config::RevealConfig;
use crate::scroll::{ElementRect, ScrollFrame};

/// Class given to every reveal candidate.
pub const FADE_IN_CLASS: &str = "fade-in";
/// Class added once a candidate has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Fraction of `rect` inside the trigger region of the current viewport.
pub fn visible_fraction(rect: &ElementRect, scroll_y: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    let root_top = scroll_y;
    let root_bottom = scroll_y + (viewport_height - bottom_margin).max(0.0);
    let top = rect.top;
    let bottom = rect.top + rect.height;

    if rect.height <= 0.0 {
        return if top >= root_top && top <= root_bottom { 1.0 } else { 0.0 };
    }

    let overlap = (bottom.min(root_bottom) - top.max(root_top)).max(0.0);
    (overlap / rect.height).clamp(0.0, 1.0)
}

/// Registry of reveal candidates and which have been shown.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    bottom_margin: f64,
    candidates: HashMap<String, bool>,
}

impl RevealTracker {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: config.bottom_margin,
            candidates: HashMap::new(),
        }
    }

    /// Tag an element as a reveal candidate. Re-registering keeps its state.
    pub fn register(&mut self, key: impl Into<String>) {
        self.candidates.entry(key.into()).or_insert(false);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.candidates.get(key).copied().unwrap_or(false)
    }

    /// Class list for a candidate: `fade-in`, plus `visible` once revealed.
    pub fn class_for(&self, key: &str) -> &'static str {
        if self.is_visible(key) {
            "fade-in visible"
        } else {
            FADE_IN_CLASS
        }
    }

    /// Evaluate a frame. Returns the keys revealed by this frame.
    ///
    /// Rects for unregistered keys are ignored.
    pub fn observe(&mut self, frame: &ScrollFrame) -> Vec<String> {
        let revealed = self.pending(frame);
        for key in &revealed {
            if let Some(visible) = self.candidates.get_mut(key) {
                *visible = true;
            }
        }
        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), "Revealed fade-in elements");
        }
        revealed
    }

    /// Hidden candidates that `frame` would reveal, without revealing them.
    pub fn pending(&self, frame: &ScrollFrame) -> Vec<String> {
        frame
            .reveal
            .iter()
            .filter(|rect| self.candidates.get(&rect.key) == Some(&false))
            .filter(|rect| {
                let fraction = visible_fraction(
                    rect,
                    frame.scroll_y,
                    frame.viewport_height,
                    self.bottom_margin,
                );
                fraction > 0.0 && fraction >= self.threshold
            })
            .map(|rect| rect.key.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(scroll_y: f64, rects: Vec<ElementRect>) -> ScrollFrame {
        ScrollFrame {
            scroll_y,
            viewport_height: 800.0,
            sections: Vec::new(),
            reveal: rects,
            ..Default::default()
        }
    }

    #[test]
    fn test_fraction_accounts_for_bottom_margin() {
        // Trigger region is [0, 750); the card starts at 740 and is 100 tall.
        let rect = ElementRect::new("card", 740.0, 100.0);
        let fraction = visible_fraction(&rect, 0.0, 800.0, 50.0);
        assert!((fraction - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        tracker.register("card");
        let revealed = tracker.observe(&frame(0.0, vec![ElementRect::new("card", 745.0, 100.0)]));
        assert!(revealed.is_empty());
        assert_eq!(tracker.class_for("card"), "fade-in");
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        tracker.register("card");
        let rect = ElementRect::new("card", 300.0, 200.0);

        assert_eq!(tracker.observe(&frame(0.0, vec![rect.clone()])), vec!["card"]);
        assert!(tracker.is_visible("card"));

        // Scrolled far past: stays visible and is not reported again
        assert!(tracker.observe(&frame(5000.0, vec![rect])).is_empty());
        assert_eq!(tracker.class_for("card"), "fade-in visible");
    }

    #[test]
    fn test_unregistered_rects_ignored() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        let revealed = tracker.observe(&frame(0.0, vec![ElementRect::new("ghost", 0.0, 10.0)]));
        assert!(revealed.is_empty());
        assert!(!tracker.is_visible("ghost"));
    }

    #[test]
    fn test_register_keeps_revealed_state() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        tracker.register("card");
        tracker.observe(&frame(0.0, vec![ElementRect::new("card", 0.0, 100.0)]));
        tracker.register("card");
        assert!(tracker.is_visible("card"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_pending_does_not_reveal() {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        tracker.register("card");
        let frame = frame(0.0, vec![ElementRect::new("card", 0.0, 100.0)]);

        assert_eq!(tracker.pending(&frame), vec!["card".to_string()]);
        assert!(!tracker.is_visible("card"));

        tracker.observe(&frame);
        assert!(tracker.pending(&frame).is_empty());
    }
}
