//! Event name type and the built-in lifecycle vocabulary.
//!
//! An [`EventName`] is an opaque string-like token identifying a lifecycle
//! moment. The built-in names live in [`lifecycle`]; arbitrary names can be
//! created at runtime and dispatched like any built-in.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod lifecycle;

/// A named lifecycle moment fired against a subject instance.
///
/// Built-in names are available as constants in [`lifecycle`]; custom names
/// are created with [`EventName::new`]. Dispatch does not require a name to be
/// cataloged — the catalog is advisory.
///
/// # Example
///
/// ```rust
/// use lifecycle_events::{lifecycle, EventName};
///
/// let archived = EventName::new("Archived");
/// assert_ne!(archived, lifecycle::CREATED);
/// assert_eq!(lifecycle::CREATED.as_str(), "Created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(Cow<'static, str>);

impl EventName {
    /// Create an event name from a static string.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create an event name from an owned or borrowed string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self(Cow::Owned(name.to_owned()))
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
