//! Transient notification toast.
//!
//! At most one notification exists at a time. Showing a new one evicts the
//! current one synchronously; there is no queue. Each notification drives its
//! own timers through [`run_lifecycle`], and because every stage is applied
//! by id, a timer belonging to an evicted notification finds nothing to act
//! on and does nothing.

use std::time::Duration;

use crate::config::NotificationConfig;

/// Reserved marker class carried by the notification node.
pub const NOTIFICATION_CLASS: &str = "notification";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    /// Modifier class, e.g. `notification-success`.
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }

    /// Font Awesome icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
        }
    }

    /// Background color.
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#14b8a6",
            NotificationKind::Error => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Where a notification is in its on-screen life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Slid in, waiting for the display timer
    Shown,
    /// Sliding out, waiting for removal
    Exiting,
}

/// Timer-driven steps after a notification is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Exit,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: Phase,
}

impl Notification {
    /// Full class list for the node.
    pub fn class(&self) -> String {
        format!("{} {}", NOTIFICATION_CLASS, self.kind.class())
    }

    /// Keyframe animation for the current phase.
    pub fn animation(&self) -> &'static str {
        match self.phase {
            Phase::Shown => "slideIn 0.3s ease",
            Phase::Exiting => "slideOut 0.3s ease",
        }
    }
}

/// Holds the single visible notification, if any.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replace whatever is showing with a new notification.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);

        if let Some(evicted) = self.current.take() {
            tracing::trace!(id = ?evicted.id, "Evicting notification");
        }

        let message = message.into();
        tracing::debug!(?id, ?kind, %message, "Showing notification");
        self.current = Some(Notification {
            id,
            message,
            kind,
            phase: Phase::Shown,
        });
        id
    }

    /// Start the exit transition. No-op unless `id` is the one showing.
    pub fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase == Phase::Shown => {
                n.phase = Phase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Remove the notification. No-op when it is already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, id: NotificationId, stage: Stage) -> bool {
        match stage {
            Stage::Exit => self.begin_exit(id),
            Stage::Remove => self.remove(id),
        }
    }
}

/// Delays between showing, exiting and removing a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    pub display: Duration,
    pub exit: Duration,
}

impl From<&NotificationConfig> for Lifecycle {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            display: config.display(),
            exit: config.exit(),
        }
    }
}

/// Drive one notification's timers, reporting each stage to `on_stage`.
///
/// The future is not `Send`-bound so it can run on a UI task that touches
/// single-threaded state.
pub async fn run_lifecycle<F>(id: NotificationId, lifecycle: Lifecycle, mut on_stage: F)
where
    F: FnMut(NotificationId, Stage),
{
    tokio::time::sleep(lifecycle.display).await;
    on_stage(id, Stage::Exit);
    tokio::time::sleep(lifecycle.exit).await;
    on_stage(id, Stage::Remove);
}
