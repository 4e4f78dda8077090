//! Strongly-typed identifiers.
//!
//! Document ids come from the realtime store as opaque strings, so every id
//! wraps a `String` rather than a UUID. An empty string is a valid value but
//! never matches a partition key (see [`TeamId::is_empty`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed ID wrapper.
macro_rules! define_id {
    ($name:ident, $kind:literal) => {
        #[doc = concat!("Opaque identifier of a ", $kind, ".")]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw document id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the raw id is empty or whitespace only.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// The record kind this id refers to.
            pub const fn kind() -> &'static str {
                $kind
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(UserId, "user");
define_id!(TeamId, "team");
define_id!(TaskId, "task");
define_id!(FileId, "file");
define_id!(MeetingId, "meeting");

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_id_display_is_raw() {
        let id = TeamId::new("design");
        assert_eq!(id.to_string(), "design");
        assert_eq!(format!("{:?}", id), "TeamId(\"design\")");
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = UserId::new("u-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u-1\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_blank_ids_are_empty() {
        assert!(TeamId::new("").is_empty());
        assert!(TeamId::new("   ").is_empty());
        assert!(!TeamId::new("t1").is_empty());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(UserId::kind(), "user");
        assert_eq!(TeamId::kind(), "team");
        assert_eq!(TaskId::kind(), "task");
        assert_eq!(FileId::kind(), "file");
        assert_eq!(MeetingId::kind(), "meeting");
    }

    proptest! {
        #[test]
        fn test_equality_is_exact(a in "[A-Za-z0-9]{1,8}", b in "[A-Za-z0-9]{1,8}") {
            prop_assert_eq!(TeamId::new(a.clone()) == TeamId::new(b.clone()), a == b);
        }
    }
}
