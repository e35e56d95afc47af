//! Person record: one tracked individual and their current fine

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier assigned when a person is added
///
/// Ledger operations address people by id, never by list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generate a new random (v4) id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its hyphenated string form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable person record
///
/// Persisted as `{"id": ..., "name": ..., "fine": ...}`. Records written
/// before ids existed (`{"name", "fine"}` only) receive a fresh id on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredPerson")]
pub struct Person {
    id: PersonId,
    name: String,
    fine: u64,
}

impl Person {
    /// Create a person with a zero fine
    ///
    /// Returns `None` when `name` is blank after trimming.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id: PersonId::generate(),
            name: name.to_string(),
            fine: 0,
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fine(&self) -> u64 {
        self.fine
    }

    /// Copy of this record with a different fine
    pub fn with_fine(&self, fine: u64) -> Self {
        Self {
            fine,
            ..self.clone()
        }
    }
}

/// Wire shape accepted when reading stored records
#[derive(Deserialize)]
struct StoredPerson {
    #[serde(default)]
    id: Option<PersonId>,
    name: String,
    fine: u64,
}

impl TryFrom<StoredPerson> for Person {
    type Error = String;

    fn try_from(stored: StoredPerson) -> Result<Self, Self::Error> {
        let name = stored.name.trim();
        if name.is_empty() {
            return Err("person name must not be blank".to_string());
        }
        Ok(Self {
            id: stored.id.unwrap_or_else(PersonId::generate),
            name: name.to_string(),
            fine: stored.fine,
        })
    }
}
