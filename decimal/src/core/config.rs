use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::attribute::AttributeSettings;
use crate::data::Backend;

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_BUSY_TIMEOUT_SECS,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_SQLITE_PATH,
};

// =============================================================================
// File Configuration (all fields optional)
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseFileConfig {
    pub backend: Option<Backend>,
    pub sqlite_path: Option<String>,
    pub postgres_url: Option<String>,
    pub max_connections: Option<u32>,
    pub busy_timeout_secs: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub database: Option<DatabaseFileConfig>,
    pub attributes: Option<Vec<AttributeSettings>>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    ///
    /// Database settings merge field by field; an attribute list in `other`
    /// replaces the current list as a whole.
    fn merge(&mut self, other: FileConfig) {
        if let Some(database) = other.database {
            let current = self.database.get_or_insert_with(DatabaseFileConfig::default);
            if database.backend.is_some() {
                tracing::trace!(backend = ?database.backend, "Merging database.backend");
                current.backend = database.backend;
            }
            if database.sqlite_path.is_some() {
                tracing::trace!(path = ?database.sqlite_path, "Merging database.sqlite_path");
                current.sqlite_path = database.sqlite_path;
            }
            if database.postgres_url.is_some() {
                tracing::trace!("Merging database.postgres_url");
                current.postgres_url = database.postgres_url;
            }
            if database.max_connections.is_some() {
                current.max_connections = database.max_connections;
            }
            if database.busy_timeout_secs.is_some() {
                current.busy_timeout_secs = database.busy_timeout_secs;
            }
            if database.acquire_timeout_secs.is_some() {
                current.acquire_timeout_secs = database.acquire_timeout_secs;
            }
        }

        if let Some(attributes) = other.attributes {
            tracing::trace!(count = attributes.len(), "Replacing attribute list");
            self.attributes = Some(attributes);
        }
    }
}

// =============================================================================
// Resolved Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub backend: Backend,
    pub sqlite_path: PathBuf,
    pub postgres_url: Option<String>,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Sqlite,
            sqlite_path: PathBuf::from(DEFAULT_SQLITE_PATH),
            postgres_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    /// Apply a `--database-url` override.
    ///
    /// `postgres://` and `postgresql://` select PostgreSQL; anything else is
    /// taken as a SQLite path, with an optional `sqlite:` / `sqlite://` prefix.
    fn apply_url(&mut self, url: &str) {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            self.backend = Backend::Postgres;
            self.postgres_url = Some(url.to_string());
        } else {
            let path = url
                .strip_prefix("sqlite://")
                .or_else(|| url.strip_prefix("sqlite:"))
                .unwrap_or(url);
            self.backend = Backend::Sqlite;
            self.sqlite_path = PathBuf::from(path);
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub attributes: Vec<AttributeSettings>,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.attribute-decimal/attribute-decimal.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.clone())
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");
        Self::from_parts(file_config, cli)
    }

    /// Layer defaults, file config and CLI overrides
    fn from_parts(file_config: FileConfig, cli: &CliConfig) -> Result<Self> {
        let file_database = file_config.database.unwrap_or_default();
        let defaults = DatabaseConfig::default();

        let mut database = DatabaseConfig {
            backend: file_database.backend.unwrap_or(defaults.backend),
            sqlite_path: file_database
                .sqlite_path
                .map(PathBuf::from)
                .unwrap_or(defaults.sqlite_path),
            postgres_url: file_database.postgres_url,
            max_connections: file_database
                .max_connections
                .unwrap_or(defaults.max_connections),
            busy_timeout_secs: file_database
                .busy_timeout_secs
                .unwrap_or(defaults.busy_timeout_secs),
            acquire_timeout_secs: file_database
                .acquire_timeout_secs
                .unwrap_or(defaults.acquire_timeout_secs),
        };

        if let Some(ref url) = cli.database_url {
            database.apply_url(url);
        }

        let config = Self {
            database,
            attributes: file_config.attributes.unwrap_or_default(),
        };
        config.validate()?;

        tracing::debug!(
            backend = %config.database.backend,
            attributes = config.attributes.len(),
            "Configuration resolved"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database.backend == Backend::Postgres && self.database.postgres_url.is_none() {
            anyhow::bail!("database.postgres_url is required when database.backend is postgres");
        }
        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be at least 1");
        }

        let mut seen = std::collections::HashSet::new();
        for attribute in &self.attributes {
            let key = attribute_key(attribute);
            if !seen.insert(key) {
                anyhow::bail!("Duplicate attribute name in config: {}", key);
            }
        }
        Ok(())
    }

    /// Find a configured attribute by name, falling back to column name
    pub fn attribute(&self, name: &str) -> Option<&AttributeSettings> {
        self.attributes
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
            .or_else(|| self.attributes.iter().find(|a| a.colname == name))
    }
}

fn attribute_key(settings: &AttributeSettings) -> &str {
    settings.name.as_deref().unwrap_or(&settings.colname)
}

/// Get the profile config path (~/.attribute-decimal/attribute-decimal.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}
