//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for Wikibase identifiers.
//! Each type ensures type safety and validates format compliance, so an
//! entity identifier can never be confused with a property identifier.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity identifier newtype wrapper
///
/// Represents an item in the target knowledge base. The format is an
/// uppercase `Q` followed by one or more digits, e.g. `Q42`.
///
/// # Examples
///
/// ```
/// use colophon::domain::ids::EntityId;
/// use std::str::FromStr;
///
/// let id = EntityId::from_str("Q12345").unwrap();
/// assert_eq!(id.as_str(), "Q12345");
/// assert_eq!(id.numeric(), 12345);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new EntityId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a `Q` followed by digits
    /// that fit in a `u64`.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if !is_prefixed_number(&id, 'Q') {
            return Err(format!(
                "Invalid entity identifier '{id}'. Expected format: Q<digits>"
            ));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the numeric part of the identifier
    ///
    /// Used for the `numeric-id` field of item statement values.
    pub fn numeric(&self) -> u64 {
        // Construction caps the digits to the u64 range, so they always
        // parse.
        self.0[1..]
            .parse()
            .expect("entity id digits validated on construction")
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Manual impl so malformed identifiers are rejected at parse time,
// whether they come from the config file or an API response.
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Property identifier newtype wrapper
///
/// Names the predicate of a statement in the target knowledge base. The
/// format is an uppercase `P` followed by one or more digits, e.g. `P31`.
///
/// # Examples
///
/// ```
/// use colophon::domain::ids::PropertyId;
/// use std::str::FromStr;
///
/// let prop = PropertyId::from_str("P31").unwrap();
/// assert_eq!(prop.as_str(), "P31");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyId(String);

impl PropertyId {
    /// Creates a new PropertyId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a `P` followed by digits
    /// that fit in a `u64`.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if !is_prefixed_number(&id, 'P') {
            return Err(format!(
                "Invalid property identifier '{id}'. Expected format: P<digits>"
            ));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PropertyId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PropertyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PropertyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

fn is_prefixed_number(s: &str, prefix: char) -> bool {
    let mut chars = s.chars();
    chars.next() == Some(prefix) && {
        let rest = chars.as_str();
        // Parsing alone would admit a leading `+`, so digits-only is
        // checked first; the parse then caps the digits to the u64 range.
        !rest.is_empty()
            && rest.bytes().all(|b| b.is_ascii_digit())
            && rest.parse::<u64>().is_ok()
    }
}
