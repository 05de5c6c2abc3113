//! Built-in lifecycle event names.
//!
//! Five families — create, update, delete, save (generic for create/update)
//! and restore (soft-delete recovery) — each with a before/during/done/after
//! phase. All of them are seeded into a new [`EventCatalog`] at construction.
//!
//! [`EventCatalog`]: crate::catalog::EventCatalog

use super::EventName;

pub(crate) mod names {
    pub(crate) const BEFORE_CREATE: &str = "BeforeCreate";
    pub(crate) const ON_CREATING: &str = "OnCreating";
    pub(crate) const CREATED: &str = "Created";
    pub(crate) const AFTER_CREATE: &str = "AfterCreate";

    pub(crate) const BEFORE_UPDATE: &str = "BeforeUpdate";
    pub(crate) const ON_UPDATING: &str = "OnUpdating";
    pub(crate) const UPDATED: &str = "Updated";
    pub(crate) const AFTER_UPDATE: &str = "AfterUpdate";

    pub(crate) const BEFORE_DELETE: &str = "BeforeDelete";
    pub(crate) const ON_DELETING: &str = "OnDeleting";
    pub(crate) const DELETED: &str = "Deleted";
    pub(crate) const AFTER_DELETE: &str = "AfterDelete";

    pub(crate) const BEFORE_SAVE: &str = "BeforeSave";
    pub(crate) const ON_SAVING: &str = "OnSaving";
    pub(crate) const SAVED: &str = "Saved";
    pub(crate) const AFTER_SAVE: &str = "AfterSave";

    pub(crate) const BEFORE_RESTORE: &str = "BeforeRestore";
    pub(crate) const ON_RESTORING: &str = "OnRestoring";
    pub(crate) const RESTORED: &str = "Restored";
    pub(crate) const AFTER_RESTORE: &str = "AfterRestore";
}

/// Fires before creation logic starts.
pub const BEFORE_CREATE: EventName = EventName::from_static(names::BEFORE_CREATE);
/// Alias for [`BEFORE_CREATE`] (semantic).
pub const ON_CREATING: EventName = EventName::from_static(names::ON_CREATING);
/// Fires after the subject is persisted.
pub const CREATED: EventName = EventName::from_static(names::CREATED);
/// Alias for [`CREATED`].
pub const AFTER_CREATE: EventName = EventName::from_static(names::AFTER_CREATE);

/// Fires before update logic starts.
pub const BEFORE_UPDATE: EventName = EventName::from_static(names::BEFORE_UPDATE);
/// Alias for [`BEFORE_UPDATE`] (semantic).
pub const ON_UPDATING: EventName = EventName::from_static(names::ON_UPDATING);
/// Fires after an update is persisted.
pub const UPDATED: EventName = EventName::from_static(names::UPDATED);
/// Alias for [`UPDATED`].
pub const AFTER_UPDATE: EventName = EventName::from_static(names::AFTER_UPDATE);

/// Fires before deletion logic starts.
pub const BEFORE_DELETE: EventName = EventName::from_static(names::BEFORE_DELETE);
/// Alias for [`BEFORE_DELETE`] (semantic).
pub const ON_DELETING: EventName = EventName::from_static(names::ON_DELETING);
/// Fires after the subject is deleted.
pub const DELETED: EventName = EventName::from_static(names::DELETED);
/// Alias for [`DELETED`].
pub const AFTER_DELETE: EventName = EventName::from_static(names::AFTER_DELETE);

/// Fires before any save, whether create or update.
pub const BEFORE_SAVE: EventName = EventName::from_static(names::BEFORE_SAVE);
/// Alias for [`BEFORE_SAVE`] (semantic).
pub const ON_SAVING: EventName = EventName::from_static(names::ON_SAVING);
/// Fires after any save, whether create or update.
pub const SAVED: EventName = EventName::from_static(names::SAVED);
/// Alias for [`SAVED`].
pub const AFTER_SAVE: EventName = EventName::from_static(names::AFTER_SAVE);

/// Fires before a soft-deleted subject is restored.
pub const BEFORE_RESTORE: EventName = EventName::from_static(names::BEFORE_RESTORE);
/// Alias for [`BEFORE_RESTORE`] (semantic).
pub const ON_RESTORING: EventName = EventName::from_static(names::ON_RESTORING);
/// Fires after a soft-deleted subject is restored.
pub const RESTORED: EventName = EventName::from_static(names::RESTORED);
/// Alias for [`RESTORED`].
pub const AFTER_RESTORE: EventName = EventName::from_static(names::AFTER_RESTORE);

/// Every built-in event name, in declaration order.
pub const ALL: [EventName; 20] = [
    BEFORE_CREATE,
    ON_CREATING,
    CREATED,
    AFTER_CREATE,
    BEFORE_UPDATE,
    ON_UPDATING,
    UPDATED,
    AFTER_UPDATE,
    BEFORE_DELETE,
    ON_DELETING,
    DELETED,
    AFTER_DELETE,
    BEFORE_SAVE,
    ON_SAVING,
    SAVED,
    AFTER_SAVE,
    BEFORE_RESTORE,
    ON_RESTORING,
    RESTORED,
    AFTER_RESTORE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_names_are_distinct() {
        let unique: HashSet<_> = ALL.into_iter().collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn test_family_phases() {
        for family in ["Create", "Update", "Delete", "Save", "Restore"] {
            let phases = ALL
                .iter()
                .filter(|name| name.as_str().contains(family))
                .count();
            assert!(phases >= 3, "family {family} is missing phases");
        }
    }
}
