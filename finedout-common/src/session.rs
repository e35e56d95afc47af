//! Hydrated ledger bound to its store
//!
//! A [`Session`] can only be obtained through [`Session::open`], which loads
//! the stored state first. Mutations therefore never race the initial load.

use crate::ledger::{Ledger, LedgerAction, LedgerError};
use crate::store::PeopleStore;
use tracing::{info, warn};

pub struct Session {
    store: PeopleStore,
    ledger: Ledger,
    default_step: u64,
}

impl Session {
    /// Hydrate a ledger from `store`
    ///
    /// Unreadable stored data falls back to an empty list and
    /// `default_step`; opening never fails.
    pub async fn open(store: PeopleStore, default_step: u64) -> Self {
        let people = store.load_or_default().await;
        let step = match store.load_step_amount().await {
            Ok(Some(step)) => step,
            Ok(None) => default_step,
            Err(e) => {
                warn!("Ignoring stored step amount: {}", e);
                default_step
            }
        };

        let ledger = Ledger::new(people, step);
        info!(
            "Session ready: {} people, step {}",
            ledger.len(),
            ledger.step_amount()
        );

        Self {
            store,
            ledger,
            default_step,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Apply one action and persist the result
    ///
    /// A rejected action leaves both the ledger and storage untouched.
    /// Storage failures after an accepted action are logged, not returned.
    pub async fn dispatch(&mut self, action: LedgerAction) -> Result<&Ledger, LedgerError> {
        let next = self.ledger.apply(action)?;

        if next.people() != self.ledger.people() {
            if let Err(e) = self.store.save(next.people()).await {
                warn!("Failed to persist people list: {}", e);
            }
        }
        if next.step_amount() != self.ledger.step_amount() {
            if let Err(e) = self.store.save_step_amount(next.step_amount()).await {
                warn!("Failed to persist step amount: {}", e);
            }
        }

        self.ledger = next;
        Ok(&self.ledger)
    }

    /// Drop all stored state and start over with an empty ledger
    ///
    /// The in-memory ledger is only reset once the stored state is gone.
    pub async fn forget(&mut self) -> crate::Result<&Ledger> {
        self.store.forget().await?;
        self.ledger = Ledger::new(Vec::new(), self.default_step);
        info!("Stored state cleared");
        Ok(&self.ledger)
    }
}
