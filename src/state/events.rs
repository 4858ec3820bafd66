//! Typed session notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential client announces logout here; UI code subscribes to react
//! (reset views, navigate home) without the client knowing who listens.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex};

/// Action label carried by a logout notification.
pub const LOGOUT_ACTION: &str = "logout";

/// Emitted once the session has been cleared by a logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEnded {
    pub action: &'static str,
}

impl SessionEnded {
    pub fn logout() -> Self {
        Self { action: LOGOUT_ACTION }
    }
}

/// Handle returned by [`SessionEvents::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionEnded) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Subscription point for [`SessionEnded`]. Clones share one registry.
#[derive(Clone, Default)]
pub struct SessionEvents {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionEnded) + Send + Sync + 'static,
    {
        let Ok(mut registry) = self.registry.lock() else {
            log::error!("session events: registry lock poisoned, listener dropped");
            return SubscriptionId(u64::MAX);
        };
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Ok(mut registry) = self.registry.lock() else {
            log::error!("session events: registry lock poisoned, cannot unsubscribe");
            return false;
        };
        let before = registry.listeners.len();
        registry.listeners.retain(|(existing, _)| *existing != id);
        registry.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.registry.lock().map_or(0, |r| r.listeners.len())
    }

    /// Deliver `event` to every current listener, in subscription order.
    pub fn emit(&self, event: &SessionEnded) {
        // Snapshot so listeners may (un)subscribe while being notified.
        let listeners: Vec<Listener> = match self.registry.lock() {
            Ok(registry) => registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => {
                log::error!("session events: registry lock poisoned, {} not delivered", event.action);
                return;
            }
        };
        for listener in listeners {
            listener(event);
        }
    }
}
