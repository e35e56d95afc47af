//! finedout library: command-line front end for the fine ledger
//!
//! `main.rs` only parses arguments and sets up logging; everything from
//! root folder resolution to the rendered view happens in [`run`].

use anyhow::{Context, Result};
use finedout_common::config::{RootFolderInitializer, RootFolderResolver, TomlConfig};
use finedout_common::date_label::current_month_year;
use finedout_common::db::init_database;
use finedout_common::{PeopleStore, Session};
use tracing::info;

pub mod cli;
pub mod commands;
pub mod view;

pub use cli::{Cli, Command};
pub use view::ScreenView;

/// Open the session, apply one command and build the resulting view
pub async fn run(cli: &Cli, config: &TomlConfig) -> Result<ScreenView> {
    let root_folder = RootFolderResolver::new()
        .with_toml_config(config)
        .with_cli_arg(cli.root_folder.clone())
        .resolve();

    let initializer = RootFolderInitializer::new(root_folder);
    initializer
        .ensure_directory_exists()
        .context("Failed to prepare root folder")?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());
    let pool = init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let mut session = Session::open(PeopleStore::new(pool.clone()), config.default_step_amount).await;

    let command = cli.command.clone().unwrap_or_default();
    let warning = commands::execute(&mut session, &command).await;

    let view = ScreenView::new(session.ledger(), &config.currency, current_month_year(), warning);
    pool.close().await;
    Ok(view)
}
