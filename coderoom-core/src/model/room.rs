use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CODE: &str = "// Start coding";
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Opaque room key chosen by clients (usually carried in a shared link).
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared state of a room. Both fields are always populated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RoomState {
    pub code: String,
    pub language: String,
}

impl Default for RoomState {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}
