//! Session-scoped UI state store.
//!
//! The [`UiStateStore`] holds shared UI flags that are independent of
//! routing — currently a single dark-mode boolean. It is an explicitly
//! owned object passed to whoever needs it, not ambient global state, and
//! it exposes a plain subscribe/notify observer interface in place of a
//! framework's reactive primitives.
//!
//! The store is single-threaded by design: mutations happen on the event
//! loop and are visible to every reader once the call returns. Observers
//! are invoked synchronously inside [`UiStateStore::set_dark_mode`].

use std::fmt;

use tracing::debug;

/// Handle identifying a subscribed observer, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(bool)>;

/// Shared UI flag store with synchronous observer notification.
///
/// # Lifecycle
///
/// Created at application start with `dark_mode == false`; lives for the
/// session; nothing is persisted.
///
/// # Examples
///
/// ```
/// use dk_nav::UiStateStore;
///
/// let mut store = UiStateStore::new();
/// assert!(!store.is_dark_mode());
///
/// store.set_dark_mode(true);
/// assert!(store.is_dark_mode());
/// ```
#[derive(Default)]
pub struct UiStateStore {
    dark_mode: bool,
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl UiStateStore {
    /// Creates a store with the initial value (`dark_mode == false`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current dark-mode flag. Always a defined boolean.
    #[inline]
    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Overwrites the dark-mode flag.
    ///
    /// Every subscribed observer is notified synchronously with the new
    /// value before this method returns — on every call, including writes
    /// of the value already stored (the set is idempotent, not a toggle).
    pub fn set_dark_mode(&mut self, value: bool) {
        self.dark_mode = value;
        debug!(dark_mode = value, "ui state updated");
        for (_, observer) in &mut self.observers {
            observer(value);
        }
    }

    /// Flips the dark-mode flag and returns the new value.
    ///
    /// Convenience for key-bound toggling; notification behaves exactly as
    /// in [`set_dark_mode`](Self::set_dark_mode).
    pub fn toggle_dark_mode(&mut self) -> bool {
        let value = !self.dark_mode;
        self.set_dark_mode(value);
        value
    }

    /// Registers an observer called on every state write.
    ///
    /// Returns a handle for [`unsubscribe`](Self::unsubscribe). The
    /// observer is not called at subscription time; read
    /// [`is_dark_mode`](Self::is_dark_mode) for the current value.
    pub fn subscribe(&mut self, observer: impl FnMut(bool) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `false` if the handle was already removed or never existed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Returns the number of subscribed observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for UiStateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiStateStore")
            .field("dark_mode", &self.dark_mode)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_initial_value_is_false() {
        let store = UiStateStore::new();
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_set_and_get() {
        let mut store = UiStateStore::new();

        store.set_dark_mode(true);
        assert!(store.is_dark_mode());

        store.set_dark_mode(false);
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut store = UiStateStore::new();
        store.set_dark_mode(true);
        store.set_dark_mode(true);
        // No hidden toggling
        assert!(store.is_dark_mode());
    }

    #[test]
    fn test_toggle() {
        let mut store = UiStateStore::new();
        assert!(store.toggle_dark_mode());
        assert!(store.is_dark_mode());
        assert!(!store.toggle_dark_mode());
        assert!(!store.is_dark_mode());
    }

    #[test]
    fn test_observer_notified_synchronously() {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut store = UiStateStore::new();
        store.subscribe(move |value| sink.borrow_mut().push(value));

        store.set_dark_mode(true);
        // Notification happened inside the call, not on some later tick
        assert_eq!(*seen.borrow(), [true]);

        store.set_dark_mode(true);
        store.set_dark_mode(false);
        assert_eq!(*seen.borrow(), [true, true, false]);
    }

    #[test]
    fn test_multiple_observers() {
        let first: Rc<RefCell<Vec<bool>>> = Rc::default();
        let second: Rc<RefCell<Vec<bool>>> = Rc::default();

        let mut store = UiStateStore::new();
        let first_sink = Rc::clone(&first);
        store.subscribe(move |value| first_sink.borrow_mut().push(value));
        let second_sink = Rc::clone(&second);
        store.subscribe(move |value| second_sink.borrow_mut().push(value));
        assert_eq!(store.observer_count(), 2);

        store.set_dark_mode(true);
        assert_eq!(*first.borrow(), [true]);
        assert_eq!(*second.borrow(), [true]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut store = UiStateStore::new();
        let id = store.subscribe(move |value| sink.borrow_mut().push(value));

        store.set_dark_mode(true);
        assert!(store.unsubscribe(id));
        store.set_dark_mode(false);

        assert_eq!(*seen.borrow(), [true]);
        assert!(!store.unsubscribe(id)); // Already removed
    }
}
