//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! Every value has a default, so the server (and the test suite) start with an
//! empty environment. Per-field setters exist for tests and runtime overrides.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub upload_dir: String,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "lms-api"),
            log_level: var_or("LOG_LEVEL", "api=info,db=info,util=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "true") == "true",
            database_path: var_or("DATABASE_PATH", "data/lms.db"),
            upload_dir: var_or("UPLOAD_DIR", "uploads"),
            host: var_or("HOST", "0.0.0.0"),
            port: parsed_or("PORT", 8080),
            max_upload_bytes: parsed_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            if let Ok(mut guard) = lock.write() {
                *guard = AppConfig::from_env();
            }
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_upload_dir(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.upload_dir = value.into());
    }
}

// --- Free accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

/// Connection URL for `DATABASE_PATH`. See [`resolve_database_url`].
pub fn database_url() -> String {
    resolve_database_url(&database_path())
}

/// SQLite file behind `DATABASE_PATH`, or `None` when it is a DSN.
pub fn database_file() -> Option<PathBuf> {
    resolve_database_file(&database_path())
}

const DSN_PREFIXES: [&str; 3] = ["sqlite:", "postgres://", "mysql://"];

fn is_dsn(path_or_url: &str) -> bool {
    DSN_PREFIXES.iter().any(|p| path_or_url.starts_with(p))
}

/// A DSN is used as is; a plain path becomes a read-write-create SQLite URL.
pub fn resolve_database_url(path_or_url: &str) -> String {
    if is_dsn(path_or_url) {
        path_or_url.to_string()
    } else {
        format!("sqlite://{path_or_url}?mode=rwc")
    }
}

pub fn resolve_database_file(path_or_url: &str) -> Option<PathBuf> {
    (!is_dsn(path_or_url)).then(|| PathBuf::from(path_or_url))
}

pub fn upload_dir() -> String {
    AppConfig::global().upload_dir.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn max_upload_bytes() -> usize {
    AppConfig::global().max_upload_bytes
}
