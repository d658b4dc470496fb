//! The page behavior controller.
//!
//! One [`PageController`] is built when the page mounts and lives as long as
//! the page. It owns every piece of transient state (scroll chrome, active
//! link, menu, reveal progress, the contact form, the notification) and turns
//! page events into state changes plus the few commands the view has to carry
//! out itself (animated scrolls, body scroll lock, opening a file).

use crate::config::PageConfig;
use crate::contact::{self, ContactForm, MessageSink, SUCCESS_MESSAGE};
use crate::error::PortfolioError;
use crate::hero::{HeroPart, HeroReveal};
use crate::menu::{ClickTarget, MenuEvent, MenuTransition, MobileMenu};
use crate::notify::{Lifecycle, Notification, NotificationCenter, NotificationId, NotificationKind, Stage};
use crate::reveal::RevealTracker;
use crate::scroll::{FrameCause, NavLink, NavTracker, ScrollChrome, ScrollFrame, SectionBounds};

/// Notice shown when the résumé button is enabled but no file is configured.
pub const RESUME_PLACEHOLDER: &str =
    "Resume download feature - Please add your resume file to enable downloads";

/// What a scroll frame changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollEffects {
    pub chrome_changed: bool,
    pub active_changed: bool,
    /// Reveal candidates that became visible with this frame
    pub revealed: Vec<String>,
    /// This frame reported the window load; the page-load reveal starts now
    pub page_loaded: bool,
}

/// Outcome of clicking a navigation link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavClick {
    /// Offset for the animated scroll
    pub target: f64,
    pub menu: MenuTransition,
}

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Result of a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub notification: NotificationId,
}

/// What the résumé button should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeAction {
    /// Feature disabled, the click does nothing
    Inert,
    /// Open the configured asset
    Open(String),
    /// No asset configured; a notice was shown instead
    Notice(NotificationId),
}

pub struct PageController {
    config: PageConfig,
    nav: NavTracker,
    menu: MobileMenu,
    reveal: RevealTracker,
    notifications: NotificationCenter,
    hero: HeroReveal,
    chrome: ScrollChrome,
    sections: Vec<SectionBounds>,
    form: ContactForm,
}

impl PageController {
    pub fn new(config: PageConfig, links: Vec<NavLink>) -> Self {
        let nav = NavTracker::new(links, &config.scroll);
        let reveal = RevealTracker::new(&config.reveal);
        Self {
            config,
            nav,
            menu: MobileMenu::new(),
            reveal,
            notifications: NotificationCenter::new(),
            hero: HeroReveal::default(),
            chrome: ScrollChrome::default(),
            sections: Vec::new(),
            form: ContactForm::default(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn chrome(&self) -> ScrollChrome {
        self.chrome
    }

    pub fn nav(&self) -> &NavTracker {
        &self.nav
    }

    /// Handle one scroll tick.
    pub fn on_scroll(&mut self, frame: &ScrollFrame) -> ScrollEffects {
        if !frame.sections.is_empty() {
            self.sections = frame.sections.clone();
        }

        let chrome = ScrollChrome::at(frame.scroll_y, &self.config.scroll);
        let chrome_changed = chrome != self.chrome;
        self.chrome = chrome;

        let page_loaded = self.starts_load(frame);
        if page_loaded {
            self.on_load();
        }

        ScrollEffects {
            chrome_changed,
            active_changed: self.nav.update(&self.sections, frame.scroll_y),
            revealed: self.reveal.observe(frame),
            page_loaded,
        }
    }

    /// Whether [`on_scroll`](Self::on_scroll) would leave every piece of
    /// page state as it is. Such frames only move the parallax shapes.
    pub fn is_quiet(&self, frame: &ScrollFrame) -> bool {
        let sections = if frame.sections.is_empty() {
            &self.sections
        } else {
            &frame.sections
        };
        *sections == self.sections
            && ScrollChrome::at(frame.scroll_y, &self.config.scroll) == self.chrome
            && !self.nav.would_change(sections, frame.scroll_y)
            && self.reveal.pending(frame).is_empty()
            && !self.starts_load(frame)
    }

    fn starts_load(&self, frame: &ScrollFrame) -> bool {
        frame.cause == FrameCause::Load && !self.hero.is_loaded()
    }

    /// Trailing recomputation of the active link once scrolling settles.
    pub fn refresh_active(&mut self, frame: &ScrollFrame) -> bool {
        if !frame.sections.is_empty() {
            self.sections = frame.sections.clone();
        }
        self.nav.update(&self.sections, frame.scroll_y)
    }

    /// Navigation link clicked. Unknown sections are ignored entirely.
    pub fn on_nav_click(&mut self, section_id: &str) -> Option<NavClick> {
        let target = self.nav.scroll_target(&self.sections, section_id)?;
        let menu = self.menu.apply(MenuEvent::NavLink);
        tracing::debug!(section_id, target, "Scrolling to section");
        Some(NavClick { target, menu })
    }

    /// Offset for the scroll-to-top button.
    pub fn on_scroll_top(&self) -> f64 {
        0.0
    }

    // ------------------------------------------------------------------
    // Mobile menu
    // ------------------------------------------------------------------

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn on_hamburger(&mut self) -> MenuTransition {
        self.menu.apply(MenuEvent::Hamburger)
    }

    pub fn on_outside_click(&mut self) -> MenuTransition {
        self.menu.apply(MenuEvent::OutsideClick)
    }

    /// A click reached the page. Returns the menu transition it caused.
    pub fn on_page_click(&mut self, target: ClickTarget) -> Option<MenuTransition> {
        MenuEvent::for_click(target).map(|event| self.menu.apply(event))
    }

    // ------------------------------------------------------------------
    // Reveal
    // ------------------------------------------------------------------

    pub fn register_reveal(&mut self, key: impl Into<String>) {
        self.reveal.register(key);
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn hero(&self) -> &HeroReveal {
        &self.hero
    }

    pub fn on_load(&mut self) {
        self.hero.mark_loaded();
    }

    pub fn reveal_hero(&mut self, part: HeroPart) {
        self.hero.reveal(part);
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// Validate, hand the message to `sink`, and report through a
    /// notification. The form is cleared only when the message is accepted.
    pub fn submit<S: MessageSink + ?Sized>(&mut self, sink: &S) -> SubmitOutcome {
        match contact::submit(&self.form, sink) {
            Ok(()) => {
                self.form.clear();
                SubmitOutcome {
                    accepted: true,
                    notification: self.notify(SUCCESS_MESSAGE, NotificationKind::Success),
                }
            }
            Err(PortfolioError::Validation(e)) => SubmitOutcome {
                accepted: false,
                notification: self.notify(e.to_string(), NotificationKind::Error),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Contact message could not be delivered");
                SubmitOutcome {
                    accepted: false,
                    notification: self.notify(e.to_string(), NotificationKind::Error),
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.notifications.show(message, kind)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn apply_notification_stage(&mut self, id: NotificationId, stage: Stage) -> bool {
        self.notifications.apply(id, stage)
    }

    pub fn notification_lifecycle(&self) -> Lifecycle {
        Lifecycle::from(&self.config.notification)
    }

    // ------------------------------------------------------------------
    // Optional features
    // ------------------------------------------------------------------

    pub fn on_resume_click(&mut self) -> ResumeAction {
        let features = &self.config.features;
        if !features.resume_download {
            return ResumeAction::Inert;
        }
        match features.resume_path.clone() {
            Some(path) => ResumeAction::Open(path),
            None => ResumeAction::Notice(self.notify(RESUME_PLACEHOLDER, NotificationKind::Success)),
        }
    }

    /// Script to register as an offline worker, when that feature is on.
    pub fn offline_worker(&self) -> Option<&str> {
        let features = &self.config.features;
        features
            .offline_worker
            .then_some(features.worker_script.as_str())
    }

    pub fn typing_enabled(&self) -> bool {
        self.config.features.typing_effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::LogSink;

    fn controller() -> PageController {
        PageController::new(
            PageConfig::default(),
            vec![NavLink::new("Home", "home"), NavLink::new("About", "about")],
        )
    }

    fn frame(scroll_y: f64) -> ScrollFrame {
        ScrollFrame {
            scroll_y,
            viewport_height: 800.0,
            sections: vec![
                SectionBounds::new("home", 0.0, 600.0),
                SectionBounds::new("about", 600.0, 600.0),
            ],
            reveal: Vec::new(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scroll_updates_chrome_and_nav() {
        let mut page = controller();
        let effects = page.on_scroll(&frame(550.0));
        assert!(effects.chrome_changed);
        assert!(effects.active_changed);
        assert!(page.chrome().navbar_scrolled);
        assert!(page.chrome().scroll_top_visible);
        assert!(page.nav().is_active("about"));
    }

    #[test]
    fn test_nav_click_closes_menu() {
        let mut page = controller();
        page.on_scroll(&frame(0.0));
        page.on_hamburger();
        assert!(page.menu().is_open());

        let click = page.on_nav_click("about").unwrap();
        assert_eq!(click.target, 520.0);
        assert_eq!(click.menu.body_lock(), Some(false));
        assert!(!page.menu().is_open());
    }

    #[test]
    fn test_nav_click_unknown_section_ignored() {
        let mut page = controller();
        page.on_scroll(&frame(0.0));
        page.on_hamburger();
        assert!(page.on_nav_click("nowhere").is_none());
        assert!(page.menu().is_open());
    }

    #[test]
    fn test_submit_rejection_keeps_form() {
        let mut page = controller();
        page.set_field(ContactField::Name, "A".to_string());
        page.set_field(ContactField::Email, "a@b.co".to_string());
        let outcome = page.submit(&LogSink);
        assert!(!outcome.accepted);
        assert_eq!(page.form().name, "A");
        assert_eq!(page.notification().unwrap().message, "Please fill in all fields");
    }

    #[test]
    fn test_resume_click_modes() {
        let mut page = controller();
        assert_eq!(page.on_resume_click(), ResumeAction::Inert);

        let mut config = PageConfig::default();
        config.features.resume_download = true;
        let mut page = PageController::new(config.clone(), Vec::new());
        assert!(matches!(page.on_resume_click(), ResumeAction::Notice(_)));
        assert_eq!(page.notification().unwrap().message, RESUME_PLACEHOLDER);

        config.features.resume_path = Some("assets/resume.pdf".to_string());
        let mut page = PageController::new(config, Vec::new());
        assert_eq!(
            page.on_resume_click(),
            ResumeAction::Open("assets/resume.pdf".to_string())
        );
    }

    #[test]
    fn test_quiet_frames_change_nothing() {
        let mut page = controller();
        assert!(!page.is_quiet(&frame(0.0)));
        page.on_scroll(&frame(0.0));

        // Only the parallax offset moves between these two frames
        assert!(page.is_quiet(&frame(30.0)));
        assert_eq!(page.on_scroll(&frame(30.0)), ScrollEffects::default());

        assert!(!page.is_quiet(&frame(60.0)));
        assert!(page.on_scroll(&frame(60.0)).chrome_changed);
        assert!(!page.is_quiet(&frame(550.0)));
    }

    #[test]
    fn test_load_frame_starts_page_load_once() {
        let mut page = controller();
        let mut load = frame(0.0);
        load.cause = FrameCause::Load;

        assert!(!page.is_quiet(&load));
        assert!(page.on_scroll(&load).page_loaded);
        assert!(page.hero().is_loaded());

        assert!(!page.on_scroll(&load).page_loaded);
        assert!(page.is_quiet(&load));
    }

    #[test]
    fn test_page_click_outside_menu_closes_it() {
        let mut page = controller();
        page.on_hamburger();

        assert_eq!(page.on_page_click(ClickTarget::Menu), None);
        assert!(page.menu().is_open());

        let transition = page.on_page_click(ClickTarget::Elsewhere).unwrap();
        assert_eq!(transition.body_lock(), Some(false));
        assert!(!page.menu().is_open());
    }

    #[test]
    fn test_optional_features_off_by_default() {
        let page = controller();
        assert!(page.offline_worker().is_none());
        assert!(!page.typing_enabled());
    }
}
