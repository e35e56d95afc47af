//! Screen summary: what the user sees after each command

use finedout_common::Ledger;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRow {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub fine: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub month: String,
    pub currency: String,
    pub step_amount: u64,
    pub people: Vec<PersonRow>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ScreenView {
    pub fn new(ledger: &Ledger, currency: &str, month: String, warning: Option<String>) -> Self {
        let people = ledger
            .people()
            .iter()
            .enumerate()
            .map(|(i, p)| PersonRow {
                position: i + 1,
                id: p.id().to_string(),
                name: p.name().to_string(),
                fine: p.fine(),
            })
            .collect();

        Self {
            month,
            currency: currency.to_string(),
            step_amount: ledger.step_amount(),
            people,
            total: ledger.total(),
            warning,
        }
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonOut {
            ok: self.warning.is_none(),
            data: self,
        })
    }
}

/// Plain-text screen, as printed without `--json`
impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.month)?;
        writeln!(f, "Step: {} {}", self.step_amount, self.currency)?;

        if self.people.is_empty() {
            writeln!(f, "  (nobody yet, try `finedout add <name>`)")?;
        }
        let width = self.people.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);
        for p in &self.people {
            writeln!(
                f,
                "{:>3}. {:<width$}  {} {}",
                p.position,
                p.name,
                p.fine,
                self.currency,
                width = width
            )?;
        }

        writeln!(f, "Total: {} {}", self.total, self.currency)
    }
}
