//! Maps CLI commands onto session actions
//!
//! Rejections are returned as a message for the user; the session and its
//! storage are left as they were.

use crate::cli::Command;
use finedout_common::{Ledger, LedgerAction, PersonId, Session};

/// Person reference as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRef {
    /// 1-based position as shown in the list
    Position(usize),
    Id(PersonId),
}

impl PersonRef {
    pub fn parse(target: &str) -> Option<Self> {
        let target = target.trim();
        if let Ok(position) = target.parse::<usize>() {
            return Some(Self::Position(position));
        }
        PersonId::parse(target).ok().map(Self::Id)
    }

    /// Resolve against the current ledger
    pub fn resolve(self, ledger: &Ledger) -> Option<PersonId> {
        match self {
            Self::Position(0) => None,
            Self::Position(n) => ledger.id_at(n - 1),
            Self::Id(id) => ledger.get(id).map(|p| p.id()),
        }
    }
}

/// Apply `command` to `session`
///
/// Returns a message when the command was rejected.
pub async fn execute(session: &mut Session, command: &Command) -> Option<String> {
    let action = match command {
        Command::Show => return None,
        Command::Forget => {
            return session
                .forget()
                .await
                .err()
                .map(|e| format!("Stored state was not cleared: {}", e));
        }
        Command::Add { name } => LedgerAction::AddPerson(name.join(" ")),
        Command::Reset => LedgerAction::ResetAll,
        Command::Step { value } => LedgerAction::SetStepAmount(value.clone()),
        Command::Remove { target } => match lookup(session.ledger(), target) {
            Ok(id) => LedgerAction::RemovePerson(id),
            Err(msg) => return Some(msg),
        },
        Command::Plus { target } => match lookup(session.ledger(), target) {
            Ok(id) => LedgerAction::Increment(id),
            Err(msg) => return Some(msg),
        },
        Command::Minus { target } => match lookup(session.ledger(), target) {
            Ok(id) => LedgerAction::Decrement(id),
            Err(msg) => return Some(msg),
        },
    };

    session.dispatch(action).await.err().map(|e| e.to_string())
}

fn lookup(ledger: &Ledger, target: &str) -> Result<PersonId, String> {
    PersonRef::parse(target)
        .and_then(|r| r.resolve(ledger))
        .ok_or_else(|| format!("No person matches {:?}", target))
}
