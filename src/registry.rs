//! Subject-type to observer-list mapping.
//!
//! Keyed by the `TypeId` of the subject type itself (never a reference to
//! it), so by-value and by-reference uses of one type resolve to the same
//! entry. The per-type observer list is stored type-erased; the only runtime
//! type assertion happens when an entry is opened for its subject type.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

use crate::diag::diag;
use crate::observer::{BoundObserver, Observable, Observer};

/// One registered subject type: its name and its ordered observer list.
///
/// `observers` always holds a `Vec<BoundObserver<S>>` for the subject type
/// the entry is keyed under.
struct SubjectEntry {
    subject_name: &'static str,
    observers: Box<dyn Any + Send + Sync>,
}

impl SubjectEntry {
    fn empty<S: Send + Sync + 'static>() -> Self {
        Self {
            subject_name: type_name::<S>(),
            observers: Box::new(Vec::<BoundObserver<S>>::new()),
        }
    }

    fn from_list<S: Send + Sync + 'static>(observers: Vec<BoundObserver<S>>) -> Self {
        Self {
            subject_name: type_name::<S>(),
            observers: Box::new(observers),
        }
    }

    fn observers<S: Send + Sync + 'static>(&self) -> &Vec<BoundObserver<S>> {
        match self.observers.downcast_ref() {
            Some(list) => list,
            // The map is keyed by TypeId::of::<S>(), so a mismatch means the
            // observer list no longer matches its subject type. Unrecoverable.
            None => panic!(
                "observer list for {} opened as {}",
                self.subject_name,
                type_name::<S>()
            ),
        }
    }

    fn observers_mut<S: Send + Sync + 'static>(&mut self) -> &mut Vec<BoundObserver<S>> {
        let subject_name = self.subject_name;
        match self.observers.downcast_mut() {
            Some(list) => list,
            None => panic!(
                "observer list for {} opened as {}",
                subject_name,
                type_name::<S>()
            ),
        }
    }
}

/// Concurrency-safe mapping from subject type identity to observers.
///
/// Lookups take the map's read path and copy the list out, so dispatch never
/// holds a lock while handlers run; mutations are serialized per shard and
/// never observed partially.
pub(crate) struct Registry {
    subjects: DashMap<TypeId, SubjectEntry>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            subjects: DashMap::new(),
        }
    }

    /// Store `S`'s declared observer list, unless one is already present.
    ///
    /// Returns whether the list was stored. First registration wins.
    pub(crate) fn register<S: Observable>(&self) -> bool {
        trace!(subject = type_name::<S>(), "registering subject type");

        match self.subjects.entry(TypeId::of::<S>()) {
            Entry::Occupied(_) => {
                diag!(
                    subject = type_name::<S>(),
                    "already registered, skipping duplicate registration"
                );
                false
            }
            Entry::Vacant(entry) => {
                let observers = S::observers();
                let count = observers.len();
                entry.insert(SubjectEntry::from_list(observers));
                diag!(
                    subject = type_name::<S>(),
                    observers = count,
                    "observers registered"
                );
                true
            }
        }
    }

    /// Append one observer to `S`'s list, creating the list if absent.
    ///
    /// Returns whether the observer was attached; an observer whose concrete
    /// type is already present is skipped.
    pub(crate) fn attach<S, O>(&self, observer: O) -> bool
    where
        S: Send + Sync + 'static,
        O: Observer<S>,
    {
        let bound = BoundObserver::new(observer);
        let mut entry = self
            .subjects
            .entry(TypeId::of::<S>())
            .or_insert_with(SubjectEntry::empty::<S>);
        let list = entry.observers_mut::<S>();

        if list
            .iter()
            .any(|existing| existing.observer_type() == bound.observer_type())
        {
            diag!(
                observer = bound.observer_name(),
                subject = type_name::<S>(),
                "observer already attached, skipping duplicate"
            );
            return false;
        }

        diag!(
            observer = bound.observer_name(),
            subject = type_name::<S>(),
            "observer attached"
        );
        list.push(bound);
        true
    }

    /// Copy of `S`'s observer list in registration order, or empty.
    pub(crate) fn snapshot<S: Send + Sync + 'static>(&self) -> Vec<BoundObserver<S>> {
        self.subjects
            .get(&TypeId::of::<S>())
            .map(|entry| entry.observers::<S>().clone())
            .unwrap_or_default()
    }

    /// Number of registered subject types.
    pub(crate) fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("subjects", &self.subjects.len())
            .finish()
    }
}
