//! In-process notification channel for "reopen the cookie prompt".
//!
//! The footer and the consent banner have no common owner besides the
//! composition root, so the root creates one bus and hands it to both
//! through context. Subscriptions unregister themselves on drop, which
//! keeps unmounted components from being called back.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use yew::Callback;

#[derive(Default)]
struct Registry {
    next_id: u32,
    listeners: HashMap<u32, Callback<()>>,
}

#[derive(Clone, Default)]
pub struct ConsentReopenBus {
    registry: Rc<RefCell<Registry>>,
}

impl PartialEq for ConsentReopenBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl std::fmt::Debug for ConsentReopenBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentReopenBus")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

impl ConsentReopenBus {
    pub fn subscribe(&self, listener: Callback<()>) -> ReopenSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, listener);
        ReopenSubscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Notifies every live subscriber. Zero subscribers is fine.
    pub fn notify(&self) {
        let listeners: Vec<Callback<()>> =
            self.registry.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener.emit(());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

pub struct ReopenSubscription {
    registry: Weak<RefCell<Registry>>,
    id: u32,
}

impl Drop for ReopenSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notify_reaches_every_subscriber() {
        let bus = ConsentReopenBus::default();
        let hits = Rc::new(Cell::new(0u32));

        let _first = bus.subscribe({
            let hits = hits.clone();
            Callback::from(move |_| hits.set(hits.get() + 1))
        });
        let _second = bus.subscribe({
            let hits = hits.clone();
            Callback::from(move |_| hits.set(hits.get() + 1))
        });

        bus.notify();
        assert_eq!(hits.get(), 2);
        bus.notify();
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn notify_without_subscribers_is_a_no_op() {
        let bus = ConsentReopenBus::default();
        bus.notify();
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn dropping_a_subscription_unregisters_it() {
        let bus = ConsentReopenBus::default();
        let hits = Rc::new(Cell::new(0u32));

        let subscription = bus.subscribe({
            let hits = hits.clone();
            Callback::from(move |_| hits.set(hits.get() + 1))
        });
        assert_eq!(bus.listener_count(), 1);

        drop(subscription);
        assert_eq!(bus.listener_count(), 0);

        bus.notify();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn clones_share_one_registry() {
        let bus = ConsentReopenBus::default();
        let alias = bus.clone();
        let hits = Rc::new(Cell::new(0u32));

        let _subscription = alias.subscribe({
            let hits = hits.clone();
            Callback::from(move |_| hits.set(hits.get() + 1))
        });

        bus.notify();
        assert_eq!(hits.get(), 1);
        assert_eq!(bus, alias);
    }
}
