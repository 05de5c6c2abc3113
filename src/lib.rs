//! # lifecycle-events
//!
//! An in-process lifecycle observer dispatcher for Rust applications built on Tokio.
//!
//! Subjects declare their observers, callers fire named lifecycle events
//! ("Created", "Updated", ...) against subject instances, and the dispatcher
//! invokes the matching handler on every observer registered for that subject's
//! type — either synchronously, blocking until all handlers complete, or
//! asynchronously with each handler running as an independent task.
//!
//! ## Features
//!
//! - **Type-keyed** registry: observers are bound to a subject *type*
//! - **Ordered** synchronous fan-out in registration order
//! - **Fire-and-forget** asynchronous fan-out with per-task panic isolation
//! - **Idempotent** registration and duplicate-free attachment
//! - **Thread-safe** by default
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use lifecycle_events::{lifecycle, BoundObserver, Dispatcher, Observable, Observer};
//!
//! #[derive(Debug, Clone)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! struct UserObserver;
//!
//! #[async_trait]
//! impl Observer<User> for UserObserver {
//!     async fn created(&self, user: &User) {
//!         println!("user {} ({}) created", user.id, user.name);
//!     }
//! }
//!
//! impl Observable for User {
//!     fn observers() -> Vec<BoundObserver<User>> {
//!         vec![BoundObserver::new(UserObserver)]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let dispatcher = Dispatcher::new();
//!     dispatcher.register::<User>();
//!
//!     let user = User { id: 1, name: "John".into() };
//!
//!     // Blocks until every matching handler has completed.
//!     dispatcher.notify(&lifecycle::CREATED, &user).await;
//!
//!     // Returns immediately; handlers run as independent tasks.
//!     dispatcher.notify_async(&lifecycle::UPDATED, &user);
//! }
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    unreachable_pub
)]

/// Event name type and the built-in lifecycle vocabulary
pub mod event;

/// Advisory catalog of known event names
pub mod catalog;

/// Observer and subject traits
pub mod observer;

/// Subject-type to observer-list mapping
mod registry;

/// Event name to handler method resolution
mod resolver;

/// Synchronous and asynchronous notification
pub mod dispatcher;

mod diag;

pub use catalog::EventCatalog;
pub use dispatcher::{global, Dispatcher};
pub use event::{lifecycle, EventName};
pub use observer::{BoundObserver, Observable, Observer};

/// Enables or disables verbose diagnostic tracing process-wide.
///
/// Affects only observability, never control flow. Disabled by default.
pub fn set_debug_logging(enabled: bool) {
    diag::set_debug_logging(enabled);
}

/// Registers a subject type's declared observers on the global dispatcher.
///
/// First registration wins; later calls for the same type are no-ops.
pub fn register<S: Observable>() {
    global().register::<S>();
}

/// Attaches one observer to a subject type on the global dispatcher.
///
/// Idempotent per concrete observer type.
pub fn attach<S, O>(observer: O)
where
    S: Send + Sync + 'static,
    O: Observer<S>,
{
    global().attach::<S, O>(observer);
}

/// Fires an event synchronously on the global dispatcher.
///
/// Completes once every matching handler has returned.
pub async fn notify<S: Send + Sync + 'static>(event: &EventName, subject: &S) {
    global().notify(event, subject).await;
}

/// Fires an event asynchronously on the global dispatcher.
///
/// Returns immediately; each matching handler runs as an independent task.
/// Must be called from within a Tokio runtime.
pub fn notify_async<S: Clone + Send + Sync + 'static>(event: &EventName, subject: &S) {
    global().notify_async(event, subject);
}

/// Adds an event name to the global dispatcher's catalog.
pub fn register_event_type(name: EventName) {
    global().catalog().register(name);
}

/// Checks whether an event name is known to the global dispatcher's catalog.
pub fn is_event_type_registered(name: &EventName) -> bool {
    global().catalog().contains(name)
}

/// Returns a snapshot of the global dispatcher's cataloged event names.
pub fn list_registered_events() -> Vec<EventName> {
    global().catalog().names()
}

/// Prelude module for convenient imports
///
/// # Example
/// ```rust
/// use lifecycle_events::prelude::*;
/// ```
pub mod prelude {
    pub use crate::event::{lifecycle, EventName};
    pub use crate::observer::{BoundObserver, Observable, Observer};
    pub use crate::{Dispatcher, EventCatalog};
}
