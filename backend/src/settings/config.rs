//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USERGROUPS_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";

/// Listener address and seed source.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERGROUPS")]
pub struct DirectorySettings {
    /// Interface the HTTP listener binds to.
    pub host: Option<String>,
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// JSON file with the initial users and groups. The built-in seed is
    /// used when unset.
    pub seed_path: Option<PathBuf>,
}

impl DirectorySettings {
    /// Configured host, falling back to the loopback interface.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Configured seed file, if any.
    pub fn seed_path(&self) -> Option<&std::path::Path> {
        self.seed_path.as_deref()
    }
}
