//! Observer and subject traits.
//!
//! An [`Observer`] reacts to lifecycle events fired against subjects of one
//! type. Every handler has a default empty body, so an observer overrides only
//! the events it cares about; events without an override are silent no-ops.
//!
//! A subject type opts into introspection-based registration by implementing
//! [`Observable`], declaring the observers bound to it.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::event::EventName;

/// A set of handlers for lifecycle events on subjects of type `S`.
///
/// One handler per built-in lifecycle event, plus [`on_event`] for names
/// outside the built-in vocabulary. All handlers default to doing nothing.
///
/// Handlers receive the subject by shared reference. They return no value;
/// failures are signaled by side effect (for example logging), outside this
/// crate's contract.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use lifecycle_events::Observer;
///
/// #[derive(Debug, Clone)]
/// struct Order { id: u64 }
///
/// struct AuditLog;
///
/// #[async_trait]
/// impl Observer<Order> for AuditLog {
///     async fn created(&self, order: &Order) {
///         println!("order {} created", order.id);
///     }
///
///     async fn deleted(&self, order: &Order) {
///         println!("order {} deleted", order.id);
///     }
/// }
/// ```
///
/// [`on_event`]: Observer::on_event
#[async_trait]
pub trait Observer<S>: Send + Sync + 'static
where
    S: Send + Sync + 'static,
{
    /// Handles `BeforeCreate`.
    async fn before_create(&self, _subject: &S) {}
    /// Handles `OnCreating`.
    async fn on_creating(&self, _subject: &S) {}
    /// Handles `Created`.
    async fn created(&self, _subject: &S) {}
    /// Handles `AfterCreate`.
    async fn after_create(&self, _subject: &S) {}

    /// Handles `BeforeUpdate`.
    async fn before_update(&self, _subject: &S) {}
    /// Handles `OnUpdating`.
    async fn on_updating(&self, _subject: &S) {}
    /// Handles `Updated`.
    async fn updated(&self, _subject: &S) {}
    /// Handles `AfterUpdate`.
    async fn after_update(&self, _subject: &S) {}

    /// Handles `BeforeDelete`.
    async fn before_delete(&self, _subject: &S) {}
    /// Handles `OnDeleting`.
    async fn on_deleting(&self, _subject: &S) {}
    /// Handles `Deleted`.
    async fn deleted(&self, _subject: &S) {}
    /// Handles `AfterDelete`.
    async fn after_delete(&self, _subject: &S) {}

    /// Handles `BeforeSave`.
    async fn before_save(&self, _subject: &S) {}
    /// Handles `OnSaving`.
    async fn on_saving(&self, _subject: &S) {}
    /// Handles `Saved`.
    async fn saved(&self, _subject: &S) {}
    /// Handles `AfterSave`.
    async fn after_save(&self, _subject: &S) {}

    /// Handles `BeforeRestore`.
    async fn before_restore(&self, _subject: &S) {}
    /// Handles `OnRestoring`.
    async fn on_restoring(&self, _subject: &S) {}
    /// Handles `Restored`.
    async fn restored(&self, _subject: &S) {}
    /// Handles `AfterRestore`.
    async fn after_restore(&self, _subject: &S) {}

    /// Handles any event name outside the built-in lifecycle vocabulary.
    async fn on_event(&self, _event: &EventName, _subject: &S) {}
}

/// A subject type that declares its own observers.
///
/// The declared list is stored on first registration; later registrations of
/// the same type are no-ops.
pub trait Observable: Send + Sync + Sized + 'static {
    /// The observers to bind to this subject type.
    fn observers() -> Vec<BoundObserver<Self>>;
}

/// An observer bound to a subject type, with its concrete type identity
/// captured at the registration boundary.
///
/// The captured [`TypeId`] is what makes duplicate attachment of the same
/// observer type detectable after the observer has been type-erased.
pub struct BoundObserver<S>
where
    S: Send + Sync + 'static,
{
    observer_type: TypeId,
    observer_name: &'static str,
    inner: Arc<dyn Observer<S>>,
}

impl<S: Send + Sync + 'static> BoundObserver<S> {
    /// Bind an observer instance to subject type `S`.
    pub fn new<O: Observer<S>>(observer: O) -> Self {
        Self {
            observer_type: TypeId::of::<O>(),
            observer_name: std::any::type_name::<O>(),
            inner: Arc::new(observer),
        }
    }

    /// Type identity of the concrete observer.
    pub(crate) fn observer_type(&self) -> TypeId {
        self.observer_type
    }

    /// Type name of the concrete observer, for diagnostics.
    pub(crate) fn observer_name(&self) -> &'static str {
        self.observer_name
    }

    /// The bound handler set.
    pub(crate) fn handlers(&self) -> &dyn Observer<S> {
        &*self.inner
    }
}

impl<S: Send + Sync + 'static> Clone for BoundObserver<S> {
    fn clone(&self) -> Self {
        Self {
            observer_type: self.observer_type,
            observer_name: self.observer_name,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Send + Sync + 'static> fmt::Debug for BoundObserver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundObserver")
            .field("observer", &self.observer_name)
            .finish()
    }
}
