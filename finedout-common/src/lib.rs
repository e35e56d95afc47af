//! # FinedOut Common Library
//!
//! Core of the FinedOut fine tracker:
//! - Person records with stable ids
//! - Fine ledger operations (add, remove, adjust, reset, step) and total
//! - People store over a SQLite key-value table
//! - Session that hydrates before mutating and persists every change
//! - Configuration loading
//! - Month/year header label

pub mod config;
pub mod date_label;
pub mod db;
pub mod error;
pub mod ledger;
pub mod person;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use ledger::{Ledger, LedgerAction, LedgerError};
pub use person::{Person, PersonId};
pub use session::Session;
pub use store::PeopleStore;
