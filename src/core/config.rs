use crate::config::Config;
use crate::config::migrate::{missing_keys, run_config_migration};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::Connection;
use std::fs;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Report keys missing from the config file. Returns true when complete.
    pub fn check() -> AppResult<bool> {
        let path = Config::config_file();
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use).",
                path.display()
            ));
            return Ok(false);
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let missing = missing_keys(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
            Ok(true)
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            Ok(false)
        }
    }

    pub fn migrate(cfg: &Config) -> AppResult<()> {
        let conn = Connection::open(&cfg.database)?;
        crate::db::initialize::init_db(&conn)?;
        run_config_migration(&conn)
    }

    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let path = Config::config_file();

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&ed).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", ed));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    ed, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    success(format!("Configuration file edited using '{}'", default_editor));
                    Ok(())
                } else {
                    Err(AppError::Config(format!("editor '{}' failed", default_editor)))
                }
            }
            _ => Err(AppError::Config(format!("editor '{}' failed", ed))),
        }
    }
}
