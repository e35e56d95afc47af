//! Command-line definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "finedout", version, about = "Track shared fines owed by a group")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Folder holding finedout.db (overrides FINEDOUT_ROOT_FOLDER and config)"
    )]
    pub root_folder: Option<PathBuf>,

    #[arg(long, global = true, value_name = "FILE", help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Show everyone's fines and the total
    #[default]
    Show,
    /// Add a person with a zero fine
    Add {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Remove a person (position as shown, or id)
    Remove { target: String },
    /// Raise a fine by the step amount
    Plus { target: String },
    /// Lower a fine by the step amount (never below zero)
    Minus { target: String },
    /// Set every fine back to zero
    Reset,
    /// Change the step amount
    Step {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Delete all stored people and the saved step
    Forget,
}
