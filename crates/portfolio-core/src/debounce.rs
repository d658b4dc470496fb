//! Trailing-edge debounce.
//!
//! A burst of calls runs the action once, `wait` after the last call of the
//! burst, with that call's arguments. Every call re-arms a shared slot with a
//! fresh generation; a timer only fires if its generation is still the latest
//! when it wakes.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

#[derive(Debug)]
struct Slot<A> {
    generation: u64,
    args: Option<A>,
}

/// Shared debounce window without an attached action.
#[derive(Debug)]
pub struct Debouncer<A> {
    wait: Duration,
    slot: Arc<Mutex<Slot<A>>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            wait: self.wait,
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A> Debouncer<A> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                args: None,
            })),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a call, superseding any pending one.
    pub fn arm(&self, args: A) -> Pending<A> {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.args = Some(args);
        Pending {
            generation: slot.generation,
            wait: self.wait,
            slot: Arc::clone(&self.slot),
        }
    }
}

/// One armed call waiting out the debounce window.
#[derive(Debug)]
pub struct Pending<A> {
    generation: u64,
    wait: Duration,
    slot: Arc<Mutex<Slot<A>>>,
}

impl<A> Pending<A> {
    /// Sleep through the window. Yields the arguments only if no later call
    /// superseded this one.
    pub async fn settle(self) -> Option<A> {
        tokio::time::sleep(self.wait).await;
        let mut slot = self.slot.lock();
        if slot.generation == self.generation {
            slot.args.take()
        } else {
            None
        }
    }
}

/// A debounced action, see [`debounce`].
pub struct Debounced<A> {
    debouncer: Debouncer<A>,
    action: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            debouncer: self.debouncer.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<A: Send + 'static> Debounced<A> {
    /// Schedule the action. Must be called from within a tokio runtime.
    pub fn call(&self, args: A) {
        let pending = self.debouncer.arm(args);
        let action = Arc::clone(&self.action);
        tokio::spawn(async move {
            if let Some(args) = pending.settle().await {
                action(args);
            }
        });
    }
}

/// Wrap `action` so that rapid calls collapse into a single trailing call.
pub fn debounce<A, F>(wait: Duration, action: F) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced {
        debouncer: Debouncer::new(wait),
        action: Arc::new(action),
    }
}
