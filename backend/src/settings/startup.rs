//! Build the initial store from settings.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::{self, DirectorySeed};
use crate::outbound::memory::InMemoryDirectoryStore;
use crate::settings::DirectorySettings;

/// Errors returned while preparing the startup store.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Seed file is not valid seed JSON.
    #[error("failed to parse seed file at {path}: {source}")]
    SeedParse {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// A seed entry was rejected by validation.
    #[error("seed rejected: {0}")]
    Seeding(#[from] domain::Error),
}

/// Create an in-memory store holding the configured seed.
///
/// # Examples
///
/// ```rust
/// use usergroups::settings::{DirectorySettings, build_store};
///
/// let settings = DirectorySettings { host: None, port: 5000, seed_path: None };
/// let store = build_store(&settings).expect("built-in seed applies");
/// assert_eq!(store.user_count(), 1);
/// ```
pub fn build_store(
    settings: &DirectorySettings,
) -> Result<InMemoryDirectoryStore, StartupSeedingError> {
    let seed = match settings.seed_path() {
        Some(path) => load_seed(path)?,
        None => {
            info!(source = "builtin", "using built-in directory seed");
            DirectorySeed::builtin()
        }
    };

    let mut store = InMemoryDirectoryStore::default();
    let summary = seed.apply(&mut store)?;
    info!(
        users = summary.user_count,
        groups = summary.group_count,
        "directory seeded"
    );
    Ok(store)
}

fn load_seed(path: &Path) -> Result<DirectorySeed, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::SeedRead {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;

    info!(path = %path.display(), "loading directory seed");
    DirectorySeed::from_json(&contents).map_err(|source| StartupSeedingError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DirectoryStore;
    use crate::domain::{ErrorCode, UserId};
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_for(path: Option<PathBuf>) -> DirectorySettings {
        DirectorySettings {
            host: None,
            port: 5000,
            seed_path: path,
        }
    }

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write seed");
        file
    }

    #[rstest]
    fn builtin_seed_is_used_without_a_path() {
        let store = build_store(&settings_for(None)).expect("store");
        let jsmith = UserId::new("jsmith").expect("valid id");
        assert!(store.contains_user(&jsmith).expect("read"));
        assert_eq!(store.group_count(), 2);
    }

    #[rstest]
    fn seed_file_replaces_builtin_contents() {
        let file = seed_file(
            r#"{
                "users": {
                    "nmarcus": {
                        "first_name": "Nina",
                        "last_name": "Marcus",
                        "userid": "nmarcus",
                        "groups": ["auditors"]
                    }
                },
                "groups": {"admins": []}
            }"#,
        );

        let store = build_store(&settings_for(Some(file.path().to_path_buf()))).expect("store");

        assert_eq!(store.user_count(), 1);
        assert!(store.contains_group("admins").expect("read"));
        assert!(store.contains_group("auditors").expect("read"));
    }

    #[rstest]
    fn missing_seed_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let error = build_store(&settings_for(Some(path.clone()))).expect_err("missing file");

        match error {
            StartupSeedingError::SeedRead { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn malformed_seed_file_is_a_parse_error() {
        let file = seed_file("{not json");

        let error =
            build_store(&settings_for(Some(file.path().to_path_buf()))).expect_err("bad JSON");

        assert!(matches!(error, StartupSeedingError::SeedParse { .. }));
    }

    #[rstest]
    fn invalid_seed_user_is_rejected() {
        let file = seed_file(
            r#"{"users": {"nmarcus": {"first_name": "Nina", "last_name": "Marcus",
                "userid": "someone-else", "groups": ["users"]}}}"#,
        );

        let error =
            build_store(&settings_for(Some(file.path().to_path_buf()))).expect_err("mismatch");

        match error {
            StartupSeedingError::Seeding(inner) => {
                assert_eq!(inner.code(), ErrorCode::InvalidRequest);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
