//! SQLite storage for Folionest.
//!
//! The only crate in the workspace that depends on Diesel. It implements
//! the repository traits defined in `folionest-core`; everything above it
//! is database-agnostic.

pub mod db;
pub mod errors;
pub mod schema;

pub mod holdings;
pub mod settings;

pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};
pub use errors::StorageError;
pub use holdings::HoldingsRepository;
pub use settings::SettingsRepository;
