//! Domain ports for the hexagonal boundary.

mod directory_store;
mod group_directory;
mod user_directory;

#[cfg(test)]
pub use directory_store::MockDirectoryStore;
pub use directory_store::{DirectoryStore, DirectoryStoreError};
pub use group_directory::GroupDirectory;
pub use user_directory::UserDirectory;
