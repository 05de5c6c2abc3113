//! Advisory catalog of known event names.
//!
//! The catalog is informational only: dispatch never consults it, and firing
//! an uncataloged event name works exactly like firing a built-in one.

use dashmap::DashSet;

use crate::diag::diag;
use crate::event::{lifecycle, EventName};

/// A concurrent set of known event names.
///
/// A new catalog is seeded with the built-in lifecycle vocabulary
/// ([`lifecycle::ALL`]); additional names can be registered at any time.
/// Reads proceed concurrently with each other; mutations are serialized per
/// shard and never observed partially.
pub struct EventCatalog {
    names: DashSet<EventName>,
}

impl EventCatalog {
    /// Create a catalog seeded with the built-in lifecycle events.
    pub fn new() -> Self {
        let names = DashSet::with_capacity(lifecycle::ALL.len() * 2);
        for name in lifecycle::ALL {
            names.insert(name);
        }
        Self { names }
    }

    /// Add an event name to the catalog.
    ///
    /// Idempotent; registering a known name is a no-op.
    pub fn register(&self, name: EventName) {
        if self.names.insert(name.clone()) {
            diag!(event = %name, "registered new event type");
        } else {
            diag!(event = %name, "event type already registered, skipping");
        }
    }

    /// Whether the catalog knows this event name.
    pub fn contains(&self, name: &EventName) -> bool {
        self.names.contains(name)
    }

    /// Snapshot of all cataloged names, in unspecified order.
    pub fn names(&self) -> Vec<EventName> {
        self.names.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of cataloged names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCatalog")
            .field("names", &self.names.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_builtins() {
        let catalog = EventCatalog::new();
        assert_eq!(catalog.len(), lifecycle::ALL.len());
        assert!(catalog.contains(&lifecycle::CREATED));
        assert!(catalog.contains(&lifecycle::AFTER_RESTORE));
    }

    #[test]
    fn test_register_dynamic_name() {
        let catalog = EventCatalog::new();
        let archived = EventName::new("Archived");

        assert!(!catalog.contains(&archived));
        catalog.register(archived.clone());
        assert!(catalog.contains(&archived));
        assert!(catalog.names().contains(&archived));
    }

    #[test]
    fn test_register_is_idempotent() {
        let catalog = EventCatalog::new();
        let before = catalog.len();

        catalog.register(lifecycle::CREATED);
        catalog.register(EventName::new("Created"));

        assert_eq!(catalog.len(), before);
    }
}
