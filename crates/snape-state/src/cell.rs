//! Observable value cells.
//!
//! A [`StateCell`] owns one piece of UI state and a list of subscriber
//! callbacks. Subscribing calls the callback once with the current value, and
//! after that every [`StateCell::set`] calls every subscriber, in registration
//! order, even when the new value equals the old one.
//!
//! Cells are single-threaded (`Rc` + `RefCell`). Handles are cheap to clone and
//! all clones share the same value and subscribers.
//!
//! # Re-entrancy
//!
//! A subscriber may read or set the cell it is subscribed to. Notifications are
//! queued while a notification pass is running, so every subscriber sees the
//! values in the order they were set and the last call any subscriber receives
//! carries the cell's final value.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle returned by [`StateCell::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Shared<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    pending: RefCell<VecDeque<(Subscriber<T>, T)>>,
    notifying: Cell<bool>,
    next_id: Cell<u64>,
}

pub struct StateCell<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

/// A handle that does not keep the cell alive, for subscribers that need to
/// write back into the cell they observe.
pub struct WeakStateCell<T> {
    shared: Weak<Shared<T>>,
}

impl<T> WeakStateCell<T> {
    pub fn upgrade(&self) -> Option<StateCell<T>> {
        self.shared.upgrade().map(|shared| StateCell { shared })
    }
}

impl<T: Clone + 'static> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.shared.value.borrow().clone()
    }

    /// Borrows the current value without cloning it.
    ///
    /// `f` must not call [`StateCell::set`] on this cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.borrow())
    }

    /// Replaces the value and notifies every subscriber.
    pub fn set(&self, value: T) {
        *self.shared.value.borrow_mut() = value.clone();
        let subscribers: Vec<Subscriber<T>> = self
            .shared
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        let mut pending = self.shared.pending.borrow_mut();
        for subscriber in subscribers {
            pending.push_back((subscriber, value.clone()));
        }
        drop(pending);
        self.drain();
    }

    /// Sets the value to `f(current)`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.set(next);
    }

    /// Registers `subscriber` and immediately calls it with the current value.
    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.shared.next_id.get());
        self.shared.next_id.set(id.0 + 1);
        let subscriber: Subscriber<T> = Rc::new(subscriber);
        self.shared
            .subscribers
            .borrow_mut()
            .push((id, Rc::clone(&subscriber)));
        let current = self.get();
        self.shared
            .pending
            .borrow_mut()
            .push_back((subscriber, current));
        self.drain();
        id
    }

    /// Removes a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.shared.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn downgrade(&self) -> WeakStateCell<T> {
        WeakStateCell {
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    fn drain(&self) {
        if self.shared.notifying.replace(true) {
            return;
        }
        loop {
            let next = self.shared.pending.borrow_mut().pop_front();
            let Some((subscriber, value)) = next else {
                break;
            };
            subscriber(&value);
        }
        self.shared.notifying.set(false);
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &*self.shared.value.borrow())
            .field("subscribers", &self.shared.subscribers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + 'static>(cell: &StateCell<T>) -> Rc<RefCell<Vec<T>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cell.subscribe(move |value: &T| sink.borrow_mut().push(value.clone()));
        seen
    }

    #[test]
    fn subscribe_sees_current_value_first() {
        let cell = StateCell::new(1);
        let seen = recorder(&cell);
        cell.set(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn equal_values_still_notify() {
        let cell = StateCell::new("USA".to_string());
        let seen = recorder(&cell);
        cell.set("USA".to_string());
        cell.set("USA".to_string());
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let cell = StateCell::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            cell.subscribe(move |_: &i32| order.borrow_mut().push(tag));
        }
        order.borrow_mut().clear();
        cell.set(1);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let cell = StateCell::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = cell.subscribe(move |value: &i32| sink.borrow_mut().push(*value));
        assert!(cell.unsubscribe(id));
        assert!(!cell.unsubscribe(id));
        cell.set(5);
        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn update_applies_to_current_value() {
        let cell = StateCell::new(10);
        cell.update(|value| value + 5);
        assert_eq!(cell.get(), 15);
    }

    #[test]
    fn reentrant_set_keeps_last_notification_current() {
        let cell = StateCell::new(0);
        let clamp = cell.clone();
        cell.subscribe(move |value: &i32| {
            if *value > 100 {
                clamp.set(100);
            }
        });
        let seen = recorder(&cell);
        cell.set(250);
        assert_eq!(cell.get(), 100);
        assert_eq!(*seen.borrow(), vec![0, 250, 100]);
    }

    #[test]
    fn weak_handle_does_not_keep_cell_alive() {
        let cell = StateCell::new(1);
        let weak = cell.downgrade();
        weak.upgrade().unwrap().set(2);
        assert_eq!(cell.get(), 2);
        drop(cell);
        assert!(weak.upgrade().is_none());
    }
}
