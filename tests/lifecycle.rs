//! End-to-end tests for registration, attachment and both notification paths.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use lifecycle_events::{lifecycle, BoundObserver, Dispatcher, EventName, Observable, Observer};

#[derive(Debug, Clone)]
struct TestUser {
    id: u64,
    name: String,
}

fn john() -> TestUser {
    TestUser {
        id: 1,
        name: "John".to_string(),
    }
}

#[derive(Default)]
struct UserCounts {
    created: AtomicUsize,
    updated: AtomicUsize,
}

struct UserObserver(Arc<UserCounts>);

#[async_trait]
impl Observer<TestUser> for UserObserver {
    async fn created(&self, user: &TestUser) {
        assert_eq!(user.id, 1);
        self.0.created.fetch_add(1, Ordering::SeqCst);
    }

    async fn updated(&self, user: &TestUser) {
        assert_eq!(user.name, "John");
        self.0.updated.fetch_add(1, Ordering::SeqCst);
    }
}

/// Polls until `counter` reaches `expected` or the deadline passes.
async fn wait_for(counter: &AtomicUsize, expected: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while counter.load(Ordering::SeqCst) < expected {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for {expected} handler completions, saw {}",
            counter.load(Ordering::SeqCst)
        );
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
}

#[tokio::test]
async fn created_then_updated_counts_once_each() {
    let dispatcher = Dispatcher::new();
    let counts = Arc::new(UserCounts::default());
    dispatcher.attach::<TestUser, _>(UserObserver(counts.clone()));

    let user = john();
    dispatcher.notify(&lifecycle::CREATED, &user).await;
    dispatcher.notify(&lifecycle::UPDATED, &user).await;

    assert_eq!(counts.created.load(Ordering::SeqCst), 1);
    assert_eq!(counts.updated.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn distinct_observer_types_all_fire_but_duplicates_are_dropped() {
    struct SecondObserver(Arc<AtomicUsize>);

    #[async_trait]
    impl Observer<TestUser> for SecondObserver {
        async fn created(&self, _user: &TestUser) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let dispatcher = Dispatcher::new();
    let counts = Arc::new(UserCounts::default());
    let second = Arc::new(AtomicUsize::new(0));

    dispatcher.attach::<TestUser, _>(UserObserver(counts.clone()));
    dispatcher.attach::<TestUser, _>(SecondObserver(second.clone()));
    // Same concrete type as the first attachment: skipped, first stays.
    dispatcher.attach::<TestUser, _>(UserObserver(Arc::new(UserCounts::default())));

    dispatcher.notify(&lifecycle::CREATED, &john()).await;

    assert_eq!(counts.created.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn introspection_registration_is_idempotent() {
    static CREATED: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone)]
    struct Article;

    struct ArticleObserver;

    #[async_trait]
    impl Observer<Article> for ArticleObserver {
        async fn created(&self, _subject: &Article) {
            CREATED.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Observable for Article {
        fn observers() -> Vec<BoundObserver<Article>> {
            vec![BoundObserver::new(ArticleObserver)]
        }
    }

    let dispatcher = Dispatcher::new();
    dispatcher.register::<Article>();
    dispatcher.register::<Article>();
    dispatcher.register::<Article>();

    dispatcher.notify(&lifecycle::CREATED, &Article).await;
    assert_eq!(CREATED.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sync_notifies_lose_nothing() {
    let dispatcher = Arc::new(Dispatcher::new());
    let counts = Arc::new(UserCounts::default());
    dispatcher.attach::<TestUser, _>(UserObserver(counts.clone()));

    let mut tasks = Vec::with_capacity(1000);
    for _ in 0..1000 {
        let dispatcher = dispatcher.clone();
        tasks.push(tokio::spawn(async move {
            dispatcher.notify(&lifecycle::CREATED, &john()).await;
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(counts.created.load(Ordering::SeqCst), 1000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_async_notifies_lose_nothing() {
    let dispatcher = Arc::new(Dispatcher::new());
    let counts = Arc::new(UserCounts::default());
    dispatcher.attach::<TestUser, _>(UserObserver(counts.clone()));

    let mut tasks = Vec::with_capacity(1000);
    for _ in 0..1000 {
        let dispatcher = dispatcher.clone();
        tasks.push(tokio::spawn(async move {
            dispatcher.notify_async(&lifecycle::CREATED, &john());
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    wait_for(&counts.created, 1000).await;
    assert_eq!(counts.created.load(Ordering::SeqCst), 1000);
}

#[tokio::test]
async fn notify_blocks_until_handlers_return() {
    struct SlowObserver(Arc<AtomicUsize>);

    #[async_trait]
    impl Observer<TestUser> for SlowObserver {
        async fn created(&self, _user: &TestUser) {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let dispatcher = Dispatcher::new();
    let done = Arc::new(AtomicUsize::new(0));
    dispatcher.attach::<TestUser, _>(SlowObserver(done.clone()));

    dispatcher.notify(&lifecycle::CREATED, &john()).await;
    // The handler must have fully completed before notify returned.
    assert_eq!(done.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn notify_async_returns_before_handlers_run() {
    struct GatedObserver {
        release: Arc<Notify>,
        ran: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Observer<TestUser> for GatedObserver {
        async fn created(&self, _user: &TestUser) {
            self.release.notified().await;
            self.ran.fetch_add(1, Ordering::SeqCst);
        }
    }

    let dispatcher = Dispatcher::new();
    let release = Arc::new(Notify::new());
    let ran = Arc::new(AtomicUsize::new(0));
    dispatcher.attach::<TestUser, _>(GatedObserver {
        release: release.clone(),
        ran: ran.clone(),
    });

    dispatcher.notify_async(&lifecycle::CREATED, &john());

    // The call returned while the handler is still parked on the gate.
    assert_eq!(ran.load(Ordering::SeqCst), 0);

    release.notify_one();
    wait_for(&ran, 1).await;
}

#[tokio::test]
async fn sync_handler_panic_propagates_to_caller() {
    struct PanickingObserver;

    #[async_trait]
    impl Observer<TestUser> for PanickingObserver {
        async fn created(&self, _user: &TestUser) {
            panic!("handler contract violation");
        }
    }

    let dispatcher = Arc::new(Dispatcher::new());
    dispatcher.attach::<TestUser, _>(PanickingObserver);

    let task = tokio::spawn(async move {
        dispatcher.notify(&lifecycle::CREATED, &john()).await;
    });

    let err = task.await.unwrap_err();
    assert!(err.is_panic());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_handler_panic_is_isolated() {
    struct PanickingObserver;

    #[async_trait]
    impl Observer<TestUser> for PanickingObserver {
        async fn created(&self, _user: &TestUser) {
            panic!("isolated to this task");
        }
    }

    let dispatcher = Dispatcher::new();
    let counts = Arc::new(UserCounts::default());
    // Launch order puts the panicking observer first.
    dispatcher.attach::<TestUser, _>(PanickingObserver);
    dispatcher.attach::<TestUser, _>(UserObserver(counts.clone()));

    dispatcher.notify_async(&lifecycle::CREATED, &john());

    // The sibling handler and the caller are unaffected.
    wait_for(&counts.created, 1).await;
}

#[tokio::test]
async fn catalog_is_advisory_only() {
    struct ArchivingObserver(Arc<AtomicUsize>);

    #[async_trait]
    impl Observer<TestUser> for ArchivingObserver {
        async fn on_event(&self, event: &EventName, _user: &TestUser) {
            if event.as_str() == "Archived" {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    let dispatcher = Dispatcher::new();
    let archived = Arc::new(AtomicUsize::new(0));
    dispatcher.attach::<TestUser, _>(ArchivingObserver(archived.clone()));

    let event = EventName::new("Archived");

    // Dispatch succeeds even though the name was never cataloged.
    assert!(!dispatcher.catalog().contains(&event));
    dispatcher.notify(&event, &john()).await;
    assert_eq!(archived.load(Ordering::SeqCst), 1);

    // Cataloging it afterwards makes it queryable and listable.
    dispatcher.catalog().register(event.clone());
    assert!(dispatcher.catalog().contains(&event));
    assert!(dispatcher.catalog().names().contains(&event));
}

#[tokio::test]
async fn global_helpers_share_one_dispatcher() {
    static CREATED: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone)]
    struct Session;

    struct SessionObserver;

    #[async_trait]
    impl Observer<Session> for SessionObserver {
        async fn created(&self, _subject: &Session) {
            CREATED.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Observable for Session {
        fn observers() -> Vec<BoundObserver<Session>> {
            vec![BoundObserver::new(SessionObserver)]
        }
    }

    lifecycle_events::register::<Session>();
    lifecycle_events::register::<Session>();

    lifecycle_events::notify(&lifecycle::CREATED, &Session).await;
    lifecycle_events::notify_async(&lifecycle::CREATED, &Session);

    wait_for(&CREATED, 2).await;

    let name = EventName::new("SessionExpired");
    assert!(!lifecycle_events::is_event_type_registered(&name));
    lifecycle_events::register_event_type(name.clone());
    assert!(lifecycle_events::is_event_type_registered(&name));
    assert!(lifecycle_events::list_registered_events().contains(&name));
}

#[tokio::test]
async fn debug_logging_does_not_affect_dispatch() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let dispatcher = Dispatcher::new();
    let counts = Arc::new(UserCounts::default());
    dispatcher.attach::<TestUser, _>(UserObserver(counts.clone()));

    lifecycle_events::set_debug_logging(true);
    dispatcher.notify(&lifecycle::CREATED, &john()).await;
    lifecycle_events::set_debug_logging(false);
    dispatcher.notify(&lifecycle::UPDATED, &john()).await;

    assert_eq!(counts.created.load(Ordering::SeqCst), 1);
    assert_eq!(counts.updated.load(Ordering::SeqCst), 1);
}
