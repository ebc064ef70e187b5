use super::{Config, KNOWN_KEYS};
use crate::db::migrate::{is_applied, mark_applied};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use rusqlite::Connection;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const VERSION: &str = "20251010_0003_add_threshold_keys";

/// Keys from [`KNOWN_KEYS`] absent from the YAML document `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

fn default_value(key: &str, defaults: &Config) -> Value {
    match key {
        "database" => Value::String(defaults.database.clone()),
        "max_days_this_week" => Value::Number(defaults.max_days_this_week.into()),
        "max_days_14d" => Value::Number(defaults.max_days_14d.into()),
        "reasons_separator" => Value::String(defaults.reasons_separator.clone()),
        _ => Value::String(defaults.separator_char.clone()),
    }
}

/// Fill the keys missing from the config file at `conf_file` with defaults.
/// Returns the keys that were added.
pub fn add_missing_keys(conf_file: &Path) -> AppResult<Vec<&'static str>> {
    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(conf_file).map_err(|_| AppError::ConfigLoad)?;
    let missing = missing_keys(&content)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;
    let defaults = Config::default();

    let map: &mut Mapping = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

    for key in &missing {
        map.insert(Value::String((*key).to_string()), default_value(key, &defaults));
    }

    let serialized = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;

    // document the thresholds right where they are declared
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("max_days_this_week:") {
            new_content.push_str("# suggest a day off from this many days worked Mon..Sun\n");
        } else if line.starts_with("max_days_14d:") {
            new_content.push_str("# suggest a day off from this many days worked over last + this week\n");
        }
    }

    fs::write(conf_file, new_content).map_err(|_| AppError::ConfigSave)?;
    Ok(missing)
}

/// Config migration recorded in the `log` table, run once per database.
pub fn run_config_migration(conn: &Connection) -> AppResult<()> {
    if is_applied(conn, VERSION)? {
        info(format!("Config migration {VERSION} already applied."));
        return Ok(());
    }

    let conf_file = Config::config_file();
    if !conf_file.exists() {
        info(format!(
            "No configuration file at {}; config migration {VERSION} left pending.",
            conf_file.display()
        ));
        return Ok(());
    }

    let added = add_missing_keys(&conf_file)?;

    let message = if added.is_empty() {
        "Config already complete".to_string()
    } else {
        format!("Added config keys: {}", added.join(", "))
    };

    mark_applied(conn, VERSION, &message)?;
    success(format!("Migration applied: {VERSION} → {message}"));
    Ok(())
}
