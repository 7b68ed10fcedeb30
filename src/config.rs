//! Site configuration and coordination endpoint resolution.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_COORDINATION_ENDPOINTS: &str = "localhost:2181";

/// Environment override for the site config location.
pub const SITE_CONFIG_ENV: &str = "TABULOR_SITE_CONFIG";

const DEFAULT_SITE_CONFIG: &str = "conf/site.yaml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Comma-separated host:port list for the coordination store.
    #[serde(default = "default_endpoints")]
    pub coordination_endpoints: String,
    /// Root of this deployment's coordination namespace.
    #[serde(default = "default_root")]
    pub root: String,
}

fn default_endpoints() -> String {
    DEFAULT_COORDINATION_ENDPOINTS.to_string()
}

fn default_root() -> String {
    crate::coordination::paths::DEFAULT_ROOT.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            coordination_endpoints: default_endpoints(),
            root: default_root(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SiteConfigError {
    #[error("unable to read site config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse site config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, SiteConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SiteConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| SiteConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the site file when present; a missing file falls back to the
    /// built-in defaults so an operator can run on flags alone.
    pub fn load_or_default(path: &Path) -> Result<Self, SiteConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// A command-line override wins over the site file.
    pub fn resolve_endpoints(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(str::to_string)
            .unwrap_or_else(|| self.coordination_endpoints.clone())
    }
}

/// Site config location: explicit flag, then environment, then the
/// conventional path.
pub fn site_config_path(cli_override: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    std::env::var_os(SITE_CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_CONFIG))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn site_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "coordination_endpoints: zk-a:2181,zk-b:2181").unwrap();
        writeln!(file, "root: /tabulor-test").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.coordination_endpoints, "zk-a:2181,zk-b:2181");
        assert_eq!(config.root, "/tabulor-test");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        std::fs::write(&path, "coordination_endpoints: zk-a:2181\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.root, crate::coordination::paths::DEFAULT_ROOT);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(
            config.coordination_endpoints,
            DEFAULT_COORDINATION_ENDPOINTS
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        std::fs::write(&path, "coordination_endpoints: [unclosed\n").unwrap();
        assert!(matches!(
            SiteConfig::load(&path),
            Err(SiteConfigError::Parse { .. })
        ));
    }

    #[test]
    fn cli_override_wins_over_site_file() {
        let config = SiteConfig {
            coordination_endpoints: "zk-a:2181".into(),
            root: default_root(),
        };
        assert_eq!(config.resolve_endpoints(Some("zk-override:2181")), "zk-override:2181");
        assert_eq!(config.resolve_endpoints(None), "zk-a:2181");
    }
}
