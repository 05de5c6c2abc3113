//! Synchronous and asynchronous notification.
//!
//! The [`Dispatcher`] owns the registry and the event catalog. Each
//! notification is a one-shot fan-out: look up the subject type's observers,
//! resolve each one's handler for the event, and invoke the handlers either
//! sequentially (blocking the caller) or as independent tasks.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::catalog::EventCatalog;
use crate::diag::diag;
use crate::event::EventName;
use crate::observer::{Observable, Observer};
use crate::registry::Registry;
use crate::resolver;

static GLOBAL: Lazy<Dispatcher> = Lazy::new(Dispatcher::new);

/// The process-wide dispatcher behind the crate-level convenience functions.
///
/// Lives for the remainder of the process once first used. Code that wants an
/// isolated dispatcher (tests, embedded subsystems) constructs its own with
/// [`Dispatcher::new`].
pub fn global() -> &'static Dispatcher {
    &GLOBAL
}

/// Fans lifecycle events out to the observers registered for a subject type.
///
/// Registration and attachment are expected to be rare (startup-time);
/// notification is the hot path and takes only a snapshot of the observer
/// list, so handlers never run under a registry lock.
pub struct Dispatcher {
    registry: Registry,
    catalog: EventCatalog,
}

impl Dispatcher {
    /// Create a dispatcher with an empty registry and a catalog seeded with
    /// the built-in lifecycle events.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            catalog: EventCatalog::new(),
        }
    }

    /// Register a subject type's declared observers.
    ///
    /// First registration wins; later calls for the same type are no-ops.
    pub fn register<S: Observable>(&self) {
        self.registry.register::<S>();
    }

    /// Attach one observer to a subject type.
    ///
    /// A second observer of the same concrete type for the same subject type
    /// is skipped; the first stays.
    pub fn attach<S, O>(&self, observer: O)
    where
        S: Send + Sync + 'static,
        O: Observer<S>,
    {
        self.registry.attach::<S, O>(observer);
    }

    /// Fire an event synchronously.
    ///
    /// Handlers run in registration order, each completing before the next
    /// starts; the call completes only after every matching handler has
    /// returned. No observers for the subject's type is a silent no-op.
    ///
    /// A panicking handler aborts the remainder of the fan-out and the panic
    /// propagates to the caller.
    pub async fn notify<S: Send + Sync + 'static>(&self, event: &EventName, subject: &S) {
        diag!(
            event = %event,
            subject = type_name::<S>(),
            "dispatching sync event"
        );

        let observers = self.registry.snapshot::<S>();
        if observers.is_empty() {
            diag!(subject = type_name::<S>(), "no observers");
            return;
        }

        for observer in &observers {
            trace!(
                event = %event,
                observer = observer.observer_name(),
                "invoking handler"
            );
            resolver::invoke(observer.handlers(), event, subject).await;
        }
    }

    /// Fire an event asynchronously.
    ///
    /// Each matching handler is spawned as an independent Tokio task and the
    /// call returns immediately. Launch order follows registration order;
    /// completion order is unspecified. A panic in one handler's task is
    /// confined to that task and cannot affect the caller or sibling tasks.
    ///
    /// The subject is cloned once and shared across the tasks.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime context.
    pub fn notify_async<S: Clone + Send + Sync + 'static>(&self, event: &EventName, subject: &S) {
        diag!(
            event = %event,
            subject = type_name::<S>(),
            "dispatching async event"
        );

        let observers = self.registry.snapshot::<S>();
        if observers.is_empty() {
            diag!(subject = type_name::<S>(), "no observers");
            return;
        }

        let subject = Arc::new(subject.clone());
        for observer in observers {
            let event = event.clone();
            let subject = Arc::clone(&subject);
            tokio::spawn(async move {
                resolver::invoke(observer.handlers(), &event, &*subject).await;
            });
        }
    }

    /// The dispatcher's event catalog.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Number of subject types with a registry entry.
    pub fn subject_count(&self) -> usize {
        self.registry.subject_count()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("catalog", &self.catalog)
            .finish()
    }
}
