// SPDX-License-Identifier: MIT

//!
//! Timeline IDs
//!

use uuid::Uuid;

/// The Stoic Calendar timeline ID type is a UUIDv4
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TimelineId(Uuid);

impl TimelineId {
    /// Create a new, random `TimelineId`
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from a string if the string is a valid ID
    pub fn from<S: ToString>(string: S) -> Result<Self, uuid::Error> {
        let string = string.to_string();
        Ok(Self(Uuid::parse_str(&string)?))
    }
}

impl Default for TimelineId {
    fn default() -> Self {
        Self::new()
    }
}
