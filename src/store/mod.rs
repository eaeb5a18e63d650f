//! In-memory state container for the task list.
//!
//! State is split into two independent slices, each owned by a [`Store`]:
//!
//! * [`todos`] - the ordered todo collection and its reducer
//! * [`ui_state`] - theme flag, welcome banner latch and the live notification
//!
//! [`AppStore`] composes both slices and exposes the intent surface the view
//! layer dispatches into. Nothing in this module knows about the terminal.

pub mod app_store;
pub mod todos;
pub mod ui_state;

pub use app_store::AppStore;
pub use todos::{TodoAction, TodoId, TodoItem, TodoState};
pub use ui_state::{NotificationKind, NotificationRecord, UiAction, UiState};

use std::fmt::Debug;

/// Reducer signature: apply `action` to `state`, return `true` when state changed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Sole owner of one state slice.
///
/// Every mutation goes through [`Store::dispatch`]. Subscribers run
/// synchronously, in subscription order, after each dispatch that changed
/// state.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    subscribers: Vec<(SubscriptionId, Subscriber<S>)>,
    next_subscription: u64,
    name: &'static str,
}

impl<S, A: Debug> Store<S, A> {
    /// Create a store with an explicit initial value.
    pub fn new(name: &'static str, initial: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: initial,
            reducer,
            subscribers: Vec::new(),
            next_subscription: 1,
            name,
        }
    }

    /// Current state, read-only.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Apply an action. Returns whether the state changed.
    pub fn dispatch(&mut self, action: A) -> bool {
        log::debug!("{}: dispatch {:?}", self.name, action);

        let changed = (self.reducer)(&mut self.state, action);
        if changed {
            for (_, subscriber) in self.subscribers.iter_mut() {
                subscriber(&self.state);
            }
        } else {
            log::debug!("{}: no state change", self.name);
        }
        changed
    }

    /// Register a callback invoked with the new state after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    enum CounterAction {
        Add(i32),
        Noop,
    }

    fn counter_reducer(state: &mut i32, action: CounterAction) -> bool {
        match action {
            CounterAction::Add(n) => {
                *state += n;
                true
            }
            CounterAction::Noop => false,
        }
    }

    #[test]
    fn dispatch_applies_reducer() {
        let mut store = Store::new("counter", 0, counter_reducer);
        assert!(store.dispatch(CounterAction::Add(3)));
        assert!(store.dispatch(CounterAction::Add(4)));
        assert_eq!(*store.state(), 7);
    }

    #[test]
    fn subscribers_only_see_changes() {
        let mut store = Store::new("counter", 0, counter_reducer);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CounterAction::Noop);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        store.dispatch(CounterAction::Add(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscribers_run_in_subscription_order() {
        let mut store = Store::new("counter", 0, counter_reducer);
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = order.clone();
            store.subscribe(move |_| order.lock().unwrap().push(tag));
        }

        store.dispatch(CounterAction::Add(1));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Store::new("counter", 0, counter_reducer);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let id = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.subscriber_count(), 0);

        store.dispatch(CounterAction::Add(1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
