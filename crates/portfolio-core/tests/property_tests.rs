//! Property-based tests for scroll-driven page behavior.

use proptest::prelude::*;
use portfolio_core::config::{ParallaxConfig, RevealConfig, ScrollConfig};
use portfolio_core::parallax::shape_offset;
use portfolio_core::{ElementRect, MobileMenu, MenuEvent, MenuState, NavLink, NavTracker, RevealTracker, ScrollFrame, SectionBounds};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Contiguous sections with a gap before the first one.
fn layout_strategy() -> impl Strategy<Value = Vec<SectionBounds>> {
    (0.0f64..500.0, prop::collection::vec(1.0f64..2000.0, 1..8)).prop_map(|(start, heights)| {
        let mut top = start;
        heights
            .into_iter()
            .enumerate()
            .map(|(i, height)| {
                let section = SectionBounds::new(format!("s{}", i), top, height);
                top += height;
                section
            })
            .collect()
    })
}

fn menu_event_strategy() -> impl Strategy<Value = MenuEvent> {
    prop_oneof![
        Just(MenuEvent::Hamburger),
        Just(MenuEvent::OutsideClick),
        Just(MenuEvent::NavLink),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// One link is active exactly when the probe point is inside a section,
    /// and it is that section's link.
    #[test]
    fn active_link_matches_probe(sections in layout_strategy(), scroll_y in 0.0f64..20000.0) {
        let links = sections.iter().map(|s| NavLink::new(s.id.clone(), s.id.clone())).collect();
        let mut nav = NavTracker::new(links, &ScrollConfig::default());
        nav.update(&sections, scroll_y);

        let probe = scroll_y + 100.0;
        let expected = sections.iter().find(|s| probe >= s.top && probe < s.top + s.height);
        match expected {
            Some(section) => {
                prop_assert_eq!(nav.active_link().map(|l| l.section_id.clone()), Some(section.id.clone()));
                let active = sections.iter().filter(|s| nav.is_active(&s.id)).count();
                prop_assert_eq!(active, 1);
            }
            None => prop_assert!(nav.active_link().is_none()),
        }
    }

    /// Parallax offset is `scroll_y * (0.5 + 0.1 * index)`.
    #[test]
    fn parallax_formula(index in 0usize..20, scroll_y in 0.0f64..10000.0) {
        let offset = shape_offset(index, scroll_y, &ParallaxConfig::default());
        let expected = scroll_y * (0.5 + 0.1 * index as f64);
        prop_assert!((offset - expected).abs() < 1e-6);
    }

    /// The body is locked exactly while the menu is open, and the lock
    /// reported by each transition agrees with the new state.
    #[test]
    fn menu_lock_tracks_state(events in prop::collection::vec(menu_event_strategy(), 0..50)) {
        let mut menu = MobileMenu::new();
        for event in events {
            let t = menu.apply(event);
            prop_assert_eq!(menu.body_locked(), menu.state() == MenuState::Open);
            if let Some(lock) = t.body_lock() {
                prop_assert_eq!(lock, menu.is_open());
            }
            if event != MenuEvent::Hamburger {
                prop_assert_eq!(menu.state(), MenuState::Closed);
            }
        }
    }

    /// Once revealed, an element stays revealed whatever the scroll does.
    #[test]
    fn reveal_is_monotonic(positions in prop::collection::vec(0.0f64..5000.0, 1..30)) {
        let mut tracker = RevealTracker::new(&RevealConfig::default());
        tracker.register("card");
        let mut seen = false;
        for scroll_y in positions {
            let frame = ScrollFrame {
                scroll_y,
                viewport_height: 800.0,
                sections: Vec::new(),
                reveal: vec![ElementRect::new("card", 2000.0, 300.0)],
                ..Default::default()
            };
            let revealed = tracker.observe(&frame);
            if seen {
                prop_assert!(revealed.is_empty());
                prop_assert!(tracker.is_visible("card"));
            }
            seen |= tracker.is_visible("card");
        }
    }
}
