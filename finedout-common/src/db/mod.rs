//! Database access: SQLite file holding the key-value `settings` table

pub mod init;
pub mod settings;

pub use init::*;
pub use settings::*;
