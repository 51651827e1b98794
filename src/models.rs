//! Frontend Models
//!
//! Data structures matching the todo service records.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Service-assigned todo identifier.
///
/// Naturals can arrive as JSON numbers or as decimal strings, depending on
/// how the bridge renders big integers. Both decode to the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> de::Visitor<'de> for IdVisitor {
            type Value = TodoId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative integer or a decimal string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TodoId, E> {
                Ok(TodoId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TodoId, E> {
                u64::try_from(v)
                    .map(TodoId)
                    .map_err(|_| E::custom(format!("negative todo id {}", v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<TodoId, E> {
                if v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
                    Ok(TodoId(v as u64))
                } else {
                    Err(E::custom(format!("invalid todo id {}", v)))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TodoId, E> {
                v.trim()
                    .parse::<u64>()
                    .map(TodoId)
                    .map_err(|_| E::custom(format!("invalid todo id {:?}", v)))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Opaque caller identity (principal text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 characters followed by an ellipsis, for the header
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(8).collect();
        format!("{}...", head)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Todo record (matches service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub owner: Principal,
    pub text: String,
    pub completed: bool,
}

/// Counters shown in the stats bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}
