//! Portfolio Core Library
//!
//! Behavior of a single-page personal portfolio, independent of the view
//! layer that renders it.
//!
//! ## Overview
//!
//! The page reacts to four kinds of events: scroll, click, submit and load.
//! Everything it remembers is transient and lives in one
//! [`PageController`]:
//!
//! - **Scroll**: navbar and scroll-to-top chrome, the active navigation link,
//!   fade-in reveals and parallax offsets ([`scroll`], [`reveal`],
//!   [`parallax`])
//! - **Click**: smooth scrolling to sections and the mobile menu ([`menu`])
//! - **Submit**: contact form validation with a single toast notification
//!   ([`contact`], [`notify`])
//! - **Load**: staggered hero reveal, footer year, optional typing effect
//!   ([`hero`], [`footer`], [`typing`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{LogSink, NavLink, PageConfig, PageController, ScrollFrame};
//!
//! let mut page = PageController::new(
//!     PageConfig::default(),
//!     vec![NavLink::new("About", "about")],
//! );
//!
//! let effects = page.on_scroll(&frame);
//! if effects.active_changed {
//!     println!("now on {:?}", page.nav().active_link());
//! }
//!
//! page.submit(&LogSink);
//! ```

pub mod banner;
pub mod config;
pub mod contact;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod footer;
pub mod hero;
pub mod logging;
pub mod menu;
pub mod notify;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod typing;

// Re-exports
pub use config::{FeatureFlags, PageConfig, Profile};
pub use contact::{ContactForm, LogSink, MessageSink};
pub use controller::{ContactField, NavClick, PageController, ResumeAction, ScrollEffects, SubmitOutcome};
pub use debounce::{debounce, Debounced, Debouncer, Pending};
pub use error::{PortfolioError, PortfolioResult, ValidationError};
pub use footer::FooterText;
pub use hero::{HeroPart, HeroReveal};
pub use menu::{ClickTarget, MenuEvent, MenuState, MenuTransition, MobileMenu};
pub use notify::{Lifecycle, Notification, NotificationCenter, NotificationId, NotificationKind, Phase, Stage};
pub use reveal::RevealTracker;
pub use scroll::{ElementRect, FrameCause, NavLink, NavTracker, ScrollChrome, ScrollFrame, SectionBounds};
