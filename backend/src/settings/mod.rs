//! Runtime settings and startup seeding.

mod config;
mod startup;

pub use config::DirectorySettings;
pub use startup::{StartupSeedingError, build_store};
