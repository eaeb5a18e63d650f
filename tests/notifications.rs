use tokio::sync::mpsc;
use tokio::time::{sleep, Duration, Instant};
use ticklist::store::{AppStore, NotificationKind};
use ticklist::ui::core::{Action, NotificationTimer};

const TIMEOUT: Duration = Duration::from_millis(1500);

fn setup() -> (AppStore, NotificationTimer, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut store = AppStore::default();
    let timer = NotificationTimer::new(TIMEOUT, tx);
    timer.attach(&mut store);
    (store, timer, rx)
}

#[tokio::test(start_paused = true)]
async fn test_notification_hides_after_timeout() {
    let (mut store, timer, mut rx) = setup();
    let start = Instant::now();

    store.show_notif(NotificationKind::Add, Some("Buy milk"), None);
    let notif = &store.ui().notif;
    assert!(notif.visible);
    assert_eq!(notif.kind, NotificationKind::Add);
    assert_eq!(notif.item, "Buy milk");
    assert!(timer.is_armed());

    sleep(Duration::from_millis(1499)).await;
    assert!(rx.try_recv().is_err());

    let generation = store.ui().notif.generation;
    assert_eq!(rx.recv().await, Some(Action::HideNotification(generation)));
    assert!(start.elapsed() >= TIMEOUT);

    store.hide_notif();
    assert!(!store.ui().notif.visible);
    assert!(!timer.is_armed());
}

#[tokio::test(start_paused = true)]
async fn test_second_notification_rearms_timer() {
    let (mut store, timer, mut rx) = setup();
    let start = Instant::now();

    store.show_notif(NotificationKind::Add, Some("A"), None);
    sleep(Duration::from_millis(1000)).await;
    store.show_notif(NotificationKind::Delete, Some("B"), None);
    assert_eq!(store.ui().notif.item, "B");
    assert!(timer.is_armed());

    // The first timer would have fired at 1500ms
    sleep(Duration::from_millis(1499)).await;
    assert!(rx.try_recv().is_err());

    // Only B's generation is ever sent
    let generation = store.ui().notif.generation;
    assert_eq!(rx.recv().await, Some(Action::HideNotification(generation)));
    assert!(start.elapsed() >= Duration::from_millis(2500));

    // Exactly one hide was sent
    sleep(Duration::from_millis(5000)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_identical_notification_still_rearms() {
    let (mut store, _timer, mut rx) = setup();
    let start = Instant::now();

    store.show_notif(NotificationKind::Add, Some("Buy milk"), None);
    sleep(Duration::from_millis(1000)).await;
    store.show_notif(NotificationKind::Add, Some("Buy milk"), None);

    let generation = store.ui().notif.generation;
    assert_eq!(rx.recv().await, Some(Action::HideNotification(generation)));
    assert!(start.elapsed() >= Duration::from_millis(2500));
}

#[tokio::test(start_paused = true)]
async fn test_manual_hide_cancels_timer() {
    let (mut store, timer, mut rx) = setup();

    store.show_notif(NotificationKind::Edit, Some("x"), None);
    store.hide_notif();
    assert!(!timer.is_armed());

    sleep(Duration::from_millis(3000)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_detach_cancels_pending_hide() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut store = AppStore::default();
    let timer = NotificationTimer::new(TIMEOUT, tx);
    let subscription = timer.attach(&mut store);

    store.show_notif(NotificationKind::Add, Some("Buy milk"), None);
    timer.detach(&mut store, subscription);
    assert!(!timer.is_armed());

    sleep(Duration::from_millis(3000)).await;
    assert!(rx.try_recv().is_err());

    // Detached timers no longer observe the store
    store.show_notif(NotificationKind::Add, Some("again"), None);
    assert!(!timer.is_armed());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_timer_and_store_aborts_task() {
    let (mut store, timer, mut rx) = setup();
    store.show_notif(NotificationKind::Add, Some("Buy milk"), None);

    drop(store);
    drop(timer);

    // All senders are gone without a hide ever being sent
    assert_eq!(rx.recv().await, None);
}

#[test]
fn test_show_without_runtime_does_not_arm() {
    let (mut store, timer, _rx) = setup();
    store.show_notif(NotificationKind::Add, Some("Buy milk"), None);
    assert!(store.ui().notif.visible);
    assert!(!timer.is_armed());
}
