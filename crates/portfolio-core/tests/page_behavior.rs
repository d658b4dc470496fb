//! End-to-end behavior of the page controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use portfolio_core::contact::SUCCESS_MESSAGE;
use portfolio_core::notify::run_lifecycle;
use portfolio_core::parallax::shape_transform;
use portfolio_core::{
    ClickTarget, ContactField, ElementRect, FrameCause, LogSink, MessageSink, NavLink,
    NotificationKind, PageConfig, PageController, Phase, PortfolioError, PortfolioResult,
    ScrollFrame, SectionBounds,
};

// ============================================================================
// Helpers
// ============================================================================

fn links() -> Vec<NavLink> {
    ["home", "about", "projects", "skills", "contact"]
        .iter()
        .map(|id| NavLink::new(id.to_uppercase(), *id))
        .collect()
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 800.0),
        SectionBounds::new("about", 800.0, 700.0),
        SectionBounds::new("projects", 1500.0, 1100.0),
        SectionBounds::new("skills", 2600.0, 600.0),
        SectionBounds::new("contact", 3200.0, 700.0),
    ]
}

fn frame(scroll_y: f64) -> ScrollFrame {
    ScrollFrame {
        scroll_y,
        viewport_height: 900.0,
        sections: sections(),
        reveal: vec![
            ElementRect::new("about-content", 900.0, 400.0),
            ElementRect::new("project-card-0", 1800.0, 350.0),
        ],
        ..Default::default()
    }
}

fn page() -> PageController {
    let mut page = PageController::new(PageConfig::default(), links());
    page.register_reveal("about-content");
    page.register_reveal("project-card-0");
    page
}

fn fill(page: &mut PageController, name: &str, email: &str, message: &str) {
    page.set_field(ContactField::Name, name.to_string());
    page.set_field(ContactField::Email, email.to_string());
    page.set_field(ContactField::Message, message.to_string());
}

struct FailingSink;

impl MessageSink for FailingSink {
    fn deliver(&self, _form: &portfolio_core::ContactForm) -> PortfolioResult<()> {
        Err(PortfolioError::Delivery("backend unavailable".to_string()))
    }
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn valid_submission_shows_success_and_clears() {
    let mut page = page();
    fill(&mut page, "A", "a@b.co", "hi");

    let outcome = page.submit(&LogSink);

    assert!(outcome.accepted);
    let note = page.notification().expect("notification shown");
    assert_eq!(note.kind, NotificationKind::Success);
    assert_eq!(note.message, SUCCESS_MESSAGE);
    assert!(page.form().is_blank());
}

#[test]
fn invalid_email_is_not_reported_as_missing_field() {
    let mut page = page();
    fill(&mut page, "A", "not-an-email", "hi");

    let outcome = page.submit(&LogSink);

    assert!(!outcome.accepted);
    let note = page.notification().unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.message, "Please enter a valid email address");
    assert_eq!(page.form().email, "not-an-email");
}

#[test]
fn any_empty_field_never_succeeds() {
    let cases = [
        ("", "a@b.co", "hi"),
        ("A", "", "hi"),
        ("A", "a@b.co", ""),
        ("", "", ""),
    ];
    for (name, email, message) in cases {
        let mut page = page();
        fill(&mut page, name, email, message);
        let outcome = page.submit(&LogSink);

        assert!(!outcome.accepted);
        assert_eq!(page.notification().unwrap().message, "Please fill in all fields");
        assert_eq!(page.form().name, name);
        assert_eq!(page.form().email, email);
        assert_eq!(page.form().message, message);
    }
}

#[test]
fn delivery_failure_keeps_form() {
    let mut page = page();
    fill(&mut page, "A", "a@b.co", "hi");

    let outcome = page.submit(&FailingSink);

    assert!(!outcome.accepted);
    assert_eq!(page.notification().unwrap().kind, NotificationKind::Error);
    assert_eq!(page.form().message, "hi");
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn back_to_back_notifications_leave_one() {
    let mut page = page();
    let first = page.notify("first", NotificationKind::Success);
    let second = page.notify("second", NotificationKind::Error);

    let current = page.notification().unwrap();
    assert_eq!(current.id, second);
    assert_ne!(current.id, first);
}

#[tokio::test(start_paused = true)]
async fn stale_timer_does_not_touch_replacement() {
    let page = Rc::new(RefCell::new(page()));
    let lifecycle = page.borrow().notification_lifecycle();

    let first = page.borrow_mut().notify("first", NotificationKind::Success);
    let driver = {
        let page = Rc::clone(&page);
        run_lifecycle(first, lifecycle, move |id, stage| {
            page.borrow_mut().apply_notification_stage(id, stage);
        })
    };

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let handle = tokio::task::spawn_local(driver);

            tokio::time::sleep(Duration::from_millis(3900)).await;
            let second = page.borrow_mut().notify("second", NotificationKind::Error);

            // First notification's timers fire at 4000ms and 4300ms
            handle.await.unwrap();

            let page = page.borrow();
            let current = page.notification().expect("replacement survives");
            assert_eq!(current.id, second);
            assert_eq!(current.phase, Phase::Shown);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn notification_dismisses_itself() {
    let page = Rc::new(RefCell::new(page()));
    let lifecycle = page.borrow().notification_lifecycle();
    let id = page.borrow_mut().notify("bye", NotificationKind::Success);

    let observer = Rc::clone(&page);
    let exiting_at = Rc::new(RefCell::new(None));
    let exiting = Rc::clone(&exiting_at);
    let start = tokio::time::Instant::now();

    run_lifecycle(id, lifecycle, move |id, stage| {
        observer.borrow_mut().apply_notification_stage(id, stage);
        if observer.borrow().notification().map(|n| n.phase) == Some(Phase::Exiting) {
            *exiting.borrow_mut() = Some(start.elapsed().as_millis());
        }
    })
    .await;

    assert_eq!(*exiting_at.borrow(), Some(4000));
    assert!(page.borrow().notification().is_none());
}

// ============================================================================
// Scrolling and menu
// ============================================================================

#[test]
fn scrolling_reveals_and_highlights() {
    let mut page = page();

    let effects = page.on_scroll(&frame(0.0));
    assert!(page.nav().is_active("home"));
    assert!(effects.revealed.is_empty());

    let effects = page.on_scroll(&frame(900.0));
    assert!(page.nav().is_active("about"));
    assert_eq!(effects.revealed, vec!["about-content".to_string()]);

    // Back to the top: highlight follows, reveal does not undo
    page.on_scroll(&frame(0.0));
    assert!(page.nav().is_active("home"));
    assert!(page.reveal().is_visible("about-content"));
}

#[test]
fn past_last_section_clears_active_link() {
    let mut page = page();
    page.on_scroll(&frame(3500.0));
    assert!(page.nav().is_active("contact"));

    page.on_scroll(&frame(5000.0));
    assert!(page.nav().active_link().is_none());
}

#[test]
fn debounced_refresh_matches_immediate_update() {
    let mut page = page();
    page.on_scroll(&frame(1600.0));
    assert!(!page.refresh_active(&frame(1600.0)));
    assert!(page.nav().is_active("projects"));
}

#[test]
fn menu_lock_follows_state() {
    let mut page = page();
    page.on_scroll(&frame(0.0));

    assert_eq!(page.on_outside_click().body_lock(), None);
    assert_eq!(page.on_hamburger().body_lock(), Some(true));
    assert!(page.menu().body_locked());

    let click = page.on_nav_click("skills").unwrap();
    assert_eq!(click.target, 2520.0);
    assert!(!page.menu().body_locked());
}

#[test]
fn parallax_uses_scroll_position() {
    let config = PageConfig::default();
    assert_eq!(shape_transform(2, 200.0, &config.parallax), "translateY(140px)");
}

#[test]
fn button_clicks_close_open_menu() {
    let mut page = page();
    page.on_scroll(&frame(0.0));
    page.on_hamburger();

    // Scroll-to-top, résumé and the hero buttons are all outside the menu
    let transition = page.on_page_click(ClickTarget::Elsewhere).unwrap();
    assert_eq!(transition.body_lock(), Some(false));
    assert!(!page.menu().body_locked());
    assert_eq!(page.on_page_click(ClickTarget::Elsewhere).unwrap().body_lock(), None);
}

#[test]
fn load_frame_marks_page_loaded() {
    let mut page = page();
    assert!(!page.hero().is_loaded());
    assert!(!page.on_scroll(&frame(0.0)).page_loaded);

    let load = ScrollFrame {
        cause: FrameCause::Load,
        ..frame(0.0)
    };
    assert!(page.on_scroll(&load).page_loaded);
    assert!(page.hero().is_loaded());
}
