//! Auto-dismiss timer for the notification toast.
//!
//! The timer observes the UI store. Each time a notification with a new
//! generation becomes visible, the previous timer (if any) is aborted and a
//! fresh single-shot timer is armed. When it fires, it sends
//! [`Action::HideNotification`] with the armed generation to the action loop.
//! The receiver must drop hides whose generation no longer matches, since a
//! fired hide may still be queued when a newer notification is shown. At most
//! one timer task is outstanding at any time.

use super::actions::Action;
use crate::store::{AppStore, NotificationRecord, SubscriptionId};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

struct TimerSlot {
    duration: Duration,
    action_sender: mpsc::UnboundedSender<Action>,
    armed_generation: Option<u64>,
    handle: Option<JoinHandle<()>>,
}

impl TimerSlot {
    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Cloneable handle; all clones share the same single slot.
#[derive(Clone)]
pub struct NotificationTimer {
    slot: Arc<Mutex<TimerSlot>>,
}

impl NotificationTimer {
    pub fn new(duration: Duration, action_sender: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(TimerSlot {
                duration,
                action_sender,
                armed_generation: None,
                handle: None,
            })),
        }
    }

    /// Subscribe to the UI store so every notification change is observed.
    pub fn attach(&self, store: &mut AppStore) -> SubscriptionId {
        let timer = self.clone();
        store.subscribe_ui(move |state| timer.observe(&state.notif))
    }

    /// Unsubscribe from the store and cancel any pending dismissal.
    pub fn detach(&self, store: &mut AppStore, subscription: SubscriptionId) {
        store.unsubscribe_ui(subscription);
        self.cancel();
    }

    /// React to the current notification record.
    pub fn observe(&self, notif: &NotificationRecord) {
        let Ok(mut slot) = self.slot.lock() else {
            return;
        };

        if !notif.visible {
            slot.abort();
            slot.armed_generation = None;
            return;
        }

        if slot.armed_generation == Some(notif.generation) {
            return;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                log::warn!("Notification timer: no runtime available, not arming ({})", e);
                return;
            }
        };

        slot.abort();
        slot.armed_generation = Some(notif.generation);

        let sender = slot.action_sender.clone();
        let duration = slot.duration;
        let generation = notif.generation;
        log::debug!("Notification timer: armed for generation {} ({:?})", generation, duration);

        slot.handle = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            log::debug!("Notification timer: fired for generation {}", generation);
            let _ = sender.send(Action::HideNotification(generation));
        }));
    }

    /// Abort the outstanding timer, if any.
    pub fn cancel(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.abort();
            slot.armed_generation = None;
        }
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_armed(&self) -> bool {
        self.slot
            .lock()
            .map(|slot| slot.handle.as_ref().is_some_and(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }
}
