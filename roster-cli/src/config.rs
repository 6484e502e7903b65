//! Configuration for the roster CLI
//!
//! Sources, highest priority first:
//! 1. `--database-url` / `--max-connections` flags (or `DATABASE_URL`)
//! 2. `.env` in the current directory, then `~/.roster/.env`
//! 3. `~/.roster/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_db::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use serde::{Deserialize, Serialize};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/roster";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Default log level when RUST_LOG is unset
    pub log_level: Option<String>,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
        }
    }
}

impl RosterConfig {
    /// Load from ~/.roster/config.toml, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file (invalid TOML): {}",
                path.display()
            )
        })
    }

    /// Apply command-line overrides on top of the file values.
    ///
    /// `max_connections` is at least one, matching what the pool uses.
    pub fn with_overrides(
        mut self,
        database_url: Option<String>,
        max_connections: Option<u32>,
    ) -> Self {
        if let Some(url) = database_url {
            self.database.url = url;
        }
        if let Some(max) = max_connections {
            self.database.max_connections = max;
        }
        self.database.max_connections = self.database.max_connections.max(1);
        self
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Connection URL with any password replaced by `***`, whether it sits
    /// in the userinfo (`user:pw@host`) or in a `password=` query parameter.
    pub fn redacted_url(&self) -> String {
        let Some((base, query)) = self.url.split_once('?') else {
            return redact_userinfo(&self.url);
        };
        let params: Vec<String> = query
            .split('&')
            .map(|param| match param.split_once('=') {
                Some(("password", _)) => "password=***".to_owned(),
                _ => param.to_owned(),
            })
            .collect();
        format!("{}?{}", redact_userinfo(base), params.join("&"))
    }
}

fn redact_userinfo(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_owned();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_owned();
    };
    match userinfo.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_owned(),
    }
}

/// Get the roster config directory path (~/.roster)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".roster"))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load `.env` from the current directory, then ~/.roster/.env.
///
/// dotenvy never overwrites variables that are already set, so earlier
/// sources win. This runs before tracing is installed, so the outcome for
/// each file found is returned for the caller to log.
pub fn load_dotenv() -> Vec<(PathBuf, dotenvy::Result<()>)> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenvy::dotenv() {
        loaded.push((path, Ok(())));
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            let result = dotenvy::from_path(&env_file);
            loaded.push((env_file, result));
        }
    }
    loaded
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the effective configuration (password redacted)
    Show,
}

pub fn run_config(args: ConfigArgs, effective: &RosterConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let path = config_path().context("Could not determine home directory")?;
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let mut shown = effective.clone();
            shown.database.url = effective.database.redacted_url();
            print!("{}", toml::to_string_pretty(&shown)?);
        }
    }
    Ok(())
}
