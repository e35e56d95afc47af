//! Fine ledger: the people list plus the adjustment step
//!
//! Every operation borrows the current ledger and returns a new one, so a
//! rejected operation can never leave a half-applied state behind. The
//! [`Ledger::apply`] reducer is what [`crate::session::Session`] drives.

use crate::person::{Person, PersonId};
use thiserror::Error;

/// Step applied per increment/decrement when nothing else is configured
pub const DEFAULT_STEP_AMOUNT: u64 = 5;

/// Smallest accepted step; a zero step would make the +/- controls inert
pub const MIN_STEP_AMOUNT: u64 = 1;

/// Rejected ledger operations
///
/// All of these are recoverable: the caller keeps the previous ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Name was empty or whitespace only
    #[error("Name must not be blank")]
    EmptyNameRejected,

    /// Step text did not parse as an integer of at least 1
    #[error("Invalid step amount: {0:?}")]
    InvalidStepInput(String),

    /// No person with this id is in the ledger
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),
}

/// One user-triggered transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerAction {
    AddPerson(String),
    RemovePerson(PersonId),
    AdjustFine { id: PersonId, delta: i64 },
    Increment(PersonId),
    Decrement(PersonId),
    ResetAll,
    SetStepAmount(String),
}

/// In-memory ledger state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    people: Vec<Person>,
    step_amount: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            step_amount: DEFAULT_STEP_AMOUNT,
        }
    }
}

impl Ledger {
    /// Ledger over an existing people list
    ///
    /// A step below [`MIN_STEP_AMOUNT`] is raised to the minimum.
    pub fn new(people: Vec<Person>, step_amount: u64) -> Self {
        Self {
            people,
            step_amount: step_amount.max(MIN_STEP_AMOUNT),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn step_amount(&self) -> u64 {
        self.step_amount
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Sum of all fines
    pub fn total(&self) -> u64 {
        self.people
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.fine()))
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id() == id)
    }

    /// Zero-based display position of `id`
    pub fn position_of(&self, id: PersonId) -> Option<usize> {
        self.people.iter().position(|p| p.id() == id)
    }

    /// Id of the person displayed at zero-based `position`
    pub fn id_at(&self, position: usize) -> Option<PersonId> {
        self.people.get(position).map(Person::id)
    }

    /// Append a new person with a zero fine
    pub fn add_person(&self, name: &str) -> Result<Ledger, LedgerError> {
        let person = Person::new(name).ok_or(LedgerError::EmptyNameRejected)?;
        let mut people = self.people.clone();
        people.push(person);
        Ok(self.with_people(people))
    }

    pub fn remove_person(&self, id: PersonId) -> Result<Ledger, LedgerError> {
        let index = self.index_of(id)?;
        let mut people = self.people.clone();
        people.remove(index);
        Ok(self.with_people(people))
    }

    /// Change one fine by `delta`, clamped to `0..=u64::MAX`
    pub fn adjust_fine(&self, id: PersonId, delta: i64) -> Result<Ledger, LedgerError> {
        let index = self.index_of(id)?;
        let current = self.people[index].fine();
        let fine = if delta >= 0 {
            current.saturating_add(delta.unsigned_abs())
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };

        let mut people = self.people.clone();
        people[index] = people[index].with_fine(fine);
        Ok(self.with_people(people))
    }

    pub fn increment(&self, id: PersonId) -> Result<Ledger, LedgerError> {
        self.adjust_fine(id, self.signed_step())
    }

    pub fn decrement(&self, id: PersonId) -> Result<Ledger, LedgerError> {
        self.adjust_fine(id, -self.signed_step())
    }

    /// Zero every fine; names, ids and order are kept
    pub fn reset_all(&self) -> Ledger {
        let people = self.people.iter().map(|p| p.with_fine(0)).collect();
        self.with_people(people)
    }

    /// Parse and apply a new step amount from raw text input
    pub fn set_step_amount(&self, raw: &str) -> Result<Ledger, LedgerError> {
        let step = raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|s| *s >= MIN_STEP_AMOUNT)
            .ok_or_else(|| LedgerError::InvalidStepInput(raw.to_string()))?;

        Ok(Ledger {
            people: self.people.clone(),
            step_amount: step,
        })
    }

    /// Reducer entry point
    pub fn apply(&self, action: LedgerAction) -> Result<Ledger, LedgerError> {
        match action {
            LedgerAction::AddPerson(name) => self.add_person(&name),
            LedgerAction::RemovePerson(id) => self.remove_person(id),
            LedgerAction::AdjustFine { id, delta } => self.adjust_fine(id, delta),
            LedgerAction::Increment(id) => self.increment(id),
            LedgerAction::Decrement(id) => self.decrement(id),
            LedgerAction::ResetAll => Ok(self.reset_all()),
            LedgerAction::SetStepAmount(raw) => self.set_step_amount(&raw),
        }
    }

    fn index_of(&self, id: PersonId) -> Result<usize, LedgerError> {
        self.position_of(id).ok_or(LedgerError::UnknownPerson(id))
    }

    fn signed_step(&self) -> i64 {
        i64::try_from(self.step_amount).unwrap_or(i64::MAX)
    }

    fn with_people(&self, people: Vec<Person>) -> Ledger {
        Ledger {
            people,
            step_amount: self.step_amount,
        }
    }
}
