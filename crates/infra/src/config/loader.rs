//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MUSTER_DB_PATH`: Database file path (required)
//! - `MUSTER_DB_POOL_SIZE`: Connection pool size
//! - `MUSTER_SHORT_ID_LENGTH`: Length of generated share ids
//! - `MUSTER_SLOT_DURATION_MINUTES`: Width of one selectable time slot
//!
//! ## File Locations
//! The loader probes `config.toml`, `config.json`, `muster.toml` and
//! `muster.json` in the current working directory and its parent.

use std::path::{Path, PathBuf};

use muster_domain::constants::DEFAULT_DB_POOL_SIZE;
use muster_domain::{Config, DatabaseConfig, MusterError, ProposalConfig, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `MusterError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `MUSTER_DB_PATH` is required; everything else falls back to defaults.
///
/// # Errors
/// Returns `MusterError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = std::env::var("MUSTER_DB_PATH")
        .map_err(|_| MusterError::Config("MUSTER_DB_PATH is not set".into()))?;
    let pool_size = env_parse("MUSTER_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE)?;

    let defaults = ProposalConfig::default();
    let short_id_length = env_parse("MUSTER_SHORT_ID_LENGTH", defaults.short_id_length)?;
    let slot_duration_minutes =
        env_parse("MUSTER_SLOT_DURATION_MINUTES", defaults.slot_duration_minutes)?;

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size },
        proposal: ProposalConfig { short_id_length, slot_duration_minutes },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MusterError::Config` if no file is found or the contents are
/// invalid.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths()
            .into_iter()
            .find(|candidate| candidate.exists())
            .ok_or_else(|| MusterError::Config("no config file found".into()))?,
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| MusterError::Config(format!("cannot read {}: {e}", path.display())))?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents)
            .map_err(|e| MusterError::Config(format!("invalid TOML in {}: {e}", path.display())))?,
        Some("json") => serde_json::from_str(&contents)
            .map_err(|e| MusterError::Config(format!("invalid JSON in {}: {e}", path.display())))?,
        _ => {
            return Err(MusterError::Config(format!(
                "unsupported config format: {}",
                path.display()
            )))
        }
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

/// Candidate config file locations, in probe order.
pub fn probe_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for dir in [".", ".."] {
        for name in ["config.toml", "config.json", "muster.toml", "muster.json"] {
            paths.push(Path::new(dir).join(name));
        }
    }
    paths
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| MusterError::Config(format!("invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn loads_toml_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[database]\npath = \"muster.db\"\npool_size = 8\n\n\
             [proposal]\nshort_id_length = 12\nslot_duration_minutes = 60"
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.database.path, "muster.db");
        assert_eq!(config.database.pool_size, 8);
        assert_eq!(config.proposal.short_id_length, 12);
        assert_eq!(config.proposal.slot_duration_minutes, 60);
    }

    #[test]
    fn loads_json_files_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"database": {"path": "muster.db"}}"#).unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.database.path, "muster.db");
        assert_eq!(config.database.pool_size, DEFAULT_DB_POOL_SIZE);
        assert_eq!(config.proposal.slot_duration_minutes, 30);
        assert_eq!(config.proposal.short_id_length, 21);
    }

    #[test]
    fn env_loading_requires_db_path() {
        // the only test in this binary that touches MUSTER_* vars
        std::env::remove_var("MUSTER_DB_PATH");
        assert!(matches!(load_from_env(), Err(MusterError::Config(_))));

        std::env::set_var("MUSTER_DB_PATH", "env.db");
        let config = load_from_env().unwrap();
        assert_eq!(config.database.path, "env.db");
        assert_eq!(config.database.pool_size, DEFAULT_DB_POOL_SIZE);
        std::env::remove_var("MUSTER_DB_PATH");
    }

    #[test]
    fn rejects_unknown_extensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "database:\n  path: nope").unwrap();

        assert!(matches!(load_from_file(Some(&path)), Err(MusterError::Config(_))));
    }

    #[test]
    fn missing_files_are_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(load_from_file(Some(&path)), Err(MusterError::Config(_))));
    }
}
