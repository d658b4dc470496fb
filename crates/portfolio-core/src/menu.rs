//! Mobile menu state machine.
//!
//! ```text
//!            hamburger
//!   Closed ─────────────▶ Open
//!     ▲                     │
//!     └─────────────────────┘
//!   hamburger | outside click | nav link
//! ```
//!
//! While open, page scrolling is suppressed by locking the body overflow.

/// Menu visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can move the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger button clicked
    Hamburger,
    /// Click that landed neither in the menu nor on the hamburger
    OutsideClick,
    /// A navigation link was followed
    NavLink,
}

impl MenuEvent {
    /// The menu event a click on `target` produces, if any.
    ///
    /// Clicks inside the open menu are the links' business; everything that
    /// is neither the menu nor the hamburger counts as an outside click.
    pub fn for_click(target: ClickTarget) -> Option<Self> {
        match target {
            ClickTarget::Menu => None,
            ClickTarget::Hamburger => Some(MenuEvent::Hamburger),
            ClickTarget::Elsewhere => Some(MenuEvent::OutsideClick),
        }
    }
}

/// Where a click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the navigation menu
    Menu,
    Hamburger,
    /// Any other element, buttons included
    Elsewhere,
}

/// Result of feeding an event to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTransition {
    pub from: MenuState,
    pub to: MenuState,
}

impl MenuTransition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// New body scroll lock, when it has to change.
    pub fn body_lock(&self) -> Option<bool> {
        self.changed().then_some(self.to == MenuState::Open)
    }
}

/// The collapsible navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Whether page scrolling is currently suppressed.
    pub fn body_locked(&self) -> bool {
        self.is_open()
    }

    pub fn apply(&mut self, event: MenuEvent) -> MenuTransition {
        let from = self.state;
        let to = match (event, from) {
            (MenuEvent::Hamburger, MenuState::Closed) => MenuState::Open,
            (MenuEvent::Hamburger, MenuState::Open) => MenuState::Closed,
            (MenuEvent::OutsideClick | MenuEvent::NavLink, _) => MenuState::Closed,
        };
        self.state = to;

        let transition = MenuTransition { from, to };
        if transition.changed() {
            tracing::debug!(?event, ?to, "Mobile menu transition");
        }
        transition
    }
}
