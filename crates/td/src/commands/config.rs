//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/td/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use todo_core::ordering::MAX_STEP;
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Valid keys for `td config set`.
const CONFIG_KEYS: &[&str] = &[
    "default_list",
    "output.color",
    "store.path",
    "ordering.step",
    "ordering.min_gap",
];

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// List used when `--list` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_list: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Precedence spacing.
    #[serde(default)]
    pub ordering: OrderingConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            default_list: None,
            output: OutputConfig::default(),
            store: StoreConfig::default(),
            ordering: OrderingConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Store configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the store file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Precedence spacing configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Spacing between neighbours after a renumber pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,

    /// Smallest gap that still fits a new item without renumbering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gap: Option<i64>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/td/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("TD_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("td"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("td"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("TD_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk. A missing file yields the defaults.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the initial schema.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref list) = config.default_list {
                println!("  default_list: {}", list);
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }

            println!("\n[store]");
            if let Some(ref store_path) = config.store.path {
                println!("  path: {}", store_path);
            }

            println!("\n[ordering]");
            if let Some(step) = config.ordering.step {
                println!("  step: {}", step);
            }
            if let Some(min_gap) = config.ordering.min_gap {
                println!("  min_gap: {}", min_gap);
            }
        } else {
            println!("(No config file exists. Run 'td config set <key> <value>' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `key = value` assignment to `config`.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "default_list") => {
            config.default_list = Some(value.to_string());
        }
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("store"), "path") => {
            config.store.path = Some(value.to_string());
        }
        (Some("ordering"), "step") => {
            config.ordering.step = Some(parse_positive(key, value)?);
        }
        (Some("ordering"), "min_gap") => {
            config.ordering.min_gap = Some(parse_positive(key, value)?);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

/// Parses an integer in `1..=MAX_STEP`.
fn parse_positive(key: &str, s: &str) -> Result<i64> {
    match s.trim().parse::<i64>() {
        Ok(n) if (1..=MAX_STEP).contains(&n) => Ok(n),
        _ => Err(CommandError::Config(format!(
            "Invalid {} value '{}'. Expected an integer from 1 to {}",
            key, s, MAX_STEP
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points `TD_CONFIG` at `path` for the duration of `f`.
    fn with_config_path<T>(path: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let original = env::var("TD_CONFIG").ok();
        env::set_var("TD_CONFIG", path);
        let result = f();
        match original {
            Some(val) => env::set_var("TD_CONFIG", val),
            None => env::remove_var("TD_CONFIG"),
        }
        result
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_bool_true_values() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("True").unwrap());
        assert!(parse_bool("yes").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool("on").unwrap());
    }

    #[test]
    fn test_parse_bool_false_values() {
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("FALSE").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("off").unwrap());
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("ordering.step", "64").unwrap(), 64);
        assert_eq!(parse_positive("ordering.step", " 8 ").unwrap(), 8);
        assert!(parse_positive("ordering.step", "0").is_err());
        assert!(parse_positive("ordering.step", "-4").is_err());
        assert!(parse_positive("ordering.step", "lots").is_err());
    }

    #[test]
    fn test_parse_positive_rejects_huge_step() {
        assert_eq!(
            parse_positive("ordering.step", &MAX_STEP.to_string()).unwrap(),
            MAX_STEP
        );
        let err = parse_positive("ordering.step", "9223372036854775807").unwrap_err();
        assert!(err.to_string().contains("from 1 to"), "{}", err);

        let mut config = Config::default();
        assert!(apply_setting(&mut config, "ordering.step", "9223372036854775807").is_err());
        assert!(config.ordering.step.is_none());
    }

    // ==================== Schema ====================

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.default_list.is_none());
        assert!(config.output.color.is_none());
        assert!(config.store.path.is_none());
        assert!(config.ordering.step.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            version: CONFIG_VERSION,
            default_list: Some("Work".to_string()),
            output: OutputConfig { color: Some(true) },
            store: StoreConfig {
                path: Some("/tmp/todos.json".to_string()),
            },
            ordering: OrderingConfig {
                step: Some(64),
                min_gap: None,
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("default_list = \"Work\""));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("color = true"));
        assert!(toml_str.contains("[ordering]"));
        assert!(toml_str.contains("step = 64"));
        assert!(!toml_str.contains("min_gap"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1
default_list = "Groceries"

[output]
color = false

[store]
path = "/data/todos.json"

[ordering]
step = 100
min_gap = 4
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_list.as_deref(), Some("Groceries"));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.store.path.as_deref(), Some("/data/todos.json"));
        assert_eq!(config.ordering.step, Some(100));
        assert_eq!(config.ordering.min_gap, Some(4));
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.default_list.is_none());
    }

    #[test]
    fn test_config_deserialization_with_future_version() {
        let config: Config = toml::from_str("version = 999").unwrap();
        assert_eq!(config.version, 999);
        assert_eq!(migrate_config(config).unwrap().version, CONFIG_VERSION);
    }

    // ==================== apply_setting ====================

    #[test]
    fn test_apply_setting_known_keys() {
        let mut config = Config::default();
        apply_setting(&mut config, "default_list", "Work").unwrap();
        apply_setting(&mut config, "output.color", "off").unwrap();
        apply_setting(&mut config, "store.path", "/tmp/x.json").unwrap();
        apply_setting(&mut config, "ordering.step", "64").unwrap();
        apply_setting(&mut config, "ordering.min_gap", "3").unwrap();

        assert_eq!(config.default_list.as_deref(), Some("Work"));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.store.path.as_deref(), Some("/tmp/x.json"));
        assert_eq!(config.ordering.step, Some(64));
        assert_eq!(config.ordering.min_gap, Some(3));
    }

    #[test]
    fn test_apply_setting_unknown_key() {
        let mut config = Config::default();
        let err = apply_setting(&mut config, "output.theme", "dark").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown config key 'output.theme'"), "{}", message);
        assert!(message.contains("ordering.min_gap"), "{}", message);
    }

    // ==================== File I/O ====================

    #[test]
    #[serial]
    fn test_get_config_path_honours_td_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");

        let resolved = with_config_path(&path, get_config_path).unwrap();

        assert_eq!(resolved, path);
    }

    #[test]
    #[serial]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let config = with_config_path(&path, load_config).unwrap();

        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.default_list.is_none());
    }

    #[test]
    #[serial]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let err = with_config_path(&path, load_config).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    #[serial]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let loaded = with_config_path(&path, || {
            let mut config = Config::default();
            apply_setting(&mut config, "ordering.step", "48")?;
            apply_setting(&mut config, "default_list", "Work")?;
            save_config(&config)?;
            load_config()
        })
        .unwrap();

        assert_eq!(loaded.ordering.step, Some(48));
        assert_eq!(loaded.default_list.as_deref(), Some("Work"));
    }
}
