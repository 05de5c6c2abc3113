//! Resolves an event name to the matching handler on an observer.
//!
//! Built-in lifecycle names map to their dedicated `Observer` methods; any
//! other name routes to the `on_event` fallback. An observer that does not
//! override the selected handler runs its default empty body, so a missing
//! handler is a silent no-op rather than an error.

use crate::event::lifecycle::names;
use crate::event::EventName;
use crate::observer::Observer;

/// Invoke the handler matching `event` on `observer` and wait for it.
pub(crate) async fn invoke<S>(observer: &dyn Observer<S>, event: &EventName, subject: &S)
where
    S: Send + Sync + 'static,
{
    match event.as_str() {
        names::BEFORE_CREATE => observer.before_create(subject).await,
        names::ON_CREATING => observer.on_creating(subject).await,
        names::CREATED => observer.created(subject).await,
        names::AFTER_CREATE => observer.after_create(subject).await,

        names::BEFORE_UPDATE => observer.before_update(subject).await,
        names::ON_UPDATING => observer.on_updating(subject).await,
        names::UPDATED => observer.updated(subject).await,
        names::AFTER_UPDATE => observer.after_update(subject).await,

        names::BEFORE_DELETE => observer.before_delete(subject).await,
        names::ON_DELETING => observer.on_deleting(subject).await,
        names::DELETED => observer.deleted(subject).await,
        names::AFTER_DELETE => observer.after_delete(subject).await,

        names::BEFORE_SAVE => observer.before_save(subject).await,
        names::ON_SAVING => observer.on_saving(subject).await,
        names::SAVED => observer.saved(subject).await,
        names::AFTER_SAVE => observer.after_save(subject).await,

        names::BEFORE_RESTORE => observer.before_restore(subject).await,
        names::ON_RESTORING => observer.on_restoring(subject).await,
        names::RESTORED => observer.restored(subject).await,
        names::AFTER_RESTORE => observer.after_restore(subject).await,

        _ => observer.on_event(event, subject).await,
    }
}
