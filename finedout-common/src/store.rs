//! People store: persistence boundary for the ledger
//!
//! The whole people list lives in one slot of the `settings` table as a JSON
//! array, fully rewritten on every save. The chosen step amount sits in a
//! second slot so that it survives between runs.
//!
//! Records written before ids existed are given ids on first load and the
//! list is written back, so an id handed out once keeps resolving.

use crate::db::{delete_setting, get_setting, set_setting};
use crate::ledger::MIN_STEP_AMOUNT;
use crate::person::Person;
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Settings key holding the JSON people list
pub const PEOPLE_KEY: &str = "finedout.people";

/// Settings key holding the step amount
pub const STEP_AMOUNT_KEY: &str = "finedout.step_amount";

/// Load/save of the people list over a SQLite key-value slot
#[derive(Debug, Clone)]
pub struct PeopleStore {
    pool: SqlitePool,
}

impl PeopleStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Read the stored people list
    ///
    /// An absent, NULL or blank slot is an empty list. Text that is not a
    /// JSON array of person records fails with [`Error::Deserialization`].
    /// Records without an id get one, and the list is saved back right away
    /// (a failed write is logged).
    pub async fn load(&self) -> Result<Vec<Person>> {
        let Some(raw) = get_setting(&self.pool, PEOPLE_KEY).await? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(Error::Deserialization)?;
        let missing_ids = records
            .iter()
            .filter(|r| r.get("id").map_or(true, |id| id.is_null()))
            .count();
        let people = records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<serde_json::Result<Vec<Person>>>()
            .map_err(Error::Deserialization)?;
        debug!("Loaded {} people from storage", people.len());

        if missing_ids > 0 {
            info!("Assigned ids to {} stored people", missing_ids);
            if let Err(e) = self.save(&people).await {
                warn!("Failed to store assigned ids: {}", e);
            }
        }
        Ok(people)
    }

    /// Read the stored people list, treating any failure as an empty list
    pub async fn load_or_default(&self) -> Vec<Person> {
        match self.load().await {
            Ok(people) => people,
            Err(e) => {
                warn!("Discarding unreadable people list, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored people list
    pub async fn save(&self, people: &[Person]) -> Result<()> {
        let json = serde_json::to_string(people).map_err(Error::Serialization)?;
        set_setting(&self.pool, PEOPLE_KEY, &json).await?;
        debug!("Saved {} people", people.len());
        Ok(())
    }

    /// Stored step amount, or `None` if absent
    ///
    /// Stored values that are not integers of at least 1 are reported as
    /// [`Error::InvalidInput`].
    pub async fn load_step_amount(&self) -> Result<Option<u64>> {
        let Some(raw) = get_setting(&self.pool, STEP_AMOUNT_KEY).await? else {
            return Ok(None);
        };

        raw.trim()
            .parse::<u64>()
            .ok()
            .filter(|s| *s >= MIN_STEP_AMOUNT)
            .map(Some)
            .ok_or_else(|| Error::InvalidInput(format!("stored step amount {:?}", raw)))
    }

    pub async fn save_step_amount(&self, step: u64) -> Result<()> {
        set_setting(&self.pool, STEP_AMOUNT_KEY, &step.to_string()).await
    }

    /// Delete both the people list and the step amount
    pub async fn forget(&self) -> Result<()> {
        delete_setting(&self.pool, PEOPLE_KEY).await?;
        delete_setting(&self.pool, STEP_AMOUNT_KEY).await?;
        Ok(())
    }
}
