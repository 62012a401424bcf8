// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::Storage;
use anyhow::{Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_task_file() -> String {
    "tasks.txt".to_string()
}
fn default_expense_file() -> String {
    "expenses.txt".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Task save file. Relative names live in the data directory.
    #[serde(default = "default_task_file")]
    pub task_file: String,
    #[serde(default = "default_expense_file")]
    pub expense_file: String,
    /// One of off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task_file: default_task_file(),
            expense_file: default_expense_file(),
            log_level: default_log_level(),
            show_welcome: true,
        }
    }
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults. Syntax and
    /// permission problems are still reported.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(cfg) => Ok(cfg),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Whether an error from `load` means the config file was simply absent.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }
        false
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        Storage::atomic_write(&path, toml_str)?;
        Ok(())
    }

    /// Log level from the config; unknown values fall back to Info.
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_gives_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
        assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let cfg = Config::load(&ctx).unwrap();
        assert_eq!(cfg.log_filter(), LevelFilter::Debug);
        assert_eq!(cfg.task_file, "tasks.txt");
        assert!(cfg.show_welcome);
    }

    #[test]
    fn broken_file_is_an_error() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "task_file = [not toml").unwrap();

        let err = Config::load_or_default(&ctx).unwrap_err();
        assert!(!Config::is_missing_config_error(&err));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn save_then_load() {
        let ctx = TestContext::new();
        let cfg = Config {
            task_file: "/tmp/elsewhere/tasks.txt".to_string(),
            show_welcome: false,
            ..Config::default()
        };
        cfg.save(&ctx).unwrap();
        assert_eq!(Config::load(&ctx).unwrap(), cfg);
    }

    #[test]
    fn shared_save_file_is_rejected() {
        let ctx = TestContext::new();
        let cfg = Config {
            expense_file: "tasks.txt".to_string(),
            ..Config::default()
        };
        let err = Storage::from_config(&ctx, &cfg).unwrap_err();
        assert!(err.to_string().contains("both point to"));

        // An absolute path naming the same file is caught too.
        let same = ctx.get_data_dir().unwrap().join("tasks.txt");
        let cfg = Config {
            expense_file: same.to_string_lossy().to_string(),
            ..Config::default()
        };
        assert!(Storage::from_config(&ctx, &cfg).is_err());
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let cfg = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        assert_eq!(cfg.log_filter(), LevelFilter::Info);
    }
}
