use crate::cmd_init::require_workspace;
use clap::Subcommand;
use ferry_report::ReportConfig;
use std::path::Path;

// ── CLI Schema ──

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Set a config value
    Set {
        /// Config key (e.g. format, show_origin_refs, fail_on_noop)
        key: String,
        /// Config value (true/false/number/string)
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
}

// ── Dispatch ──

pub fn run(cmd: ConfigCmd, repo_root: &Path) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Set { key, value } => set(repo_root, &key, &value),
        ConfigCmd::Get { key } => get(repo_root, &key),
        ConfigCmd::List => list(repo_root),
    }
}

// ── Command Implementations ──

type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Read config from `.ferry/config.json`. Returns empty map if file doesn't exist.
fn read_config(path: &Path) -> anyhow::Result<ConfigMap> {
    if !path.exists() {
        return Ok(ConfigMap::new());
    }
    let content = std::fs::read_to_string(path)?;
    let val: serde_json::Value = serde_json::from_str(&content)?;
    match val {
        serde_json::Value::Object(map) => Ok(map),
        _ => Ok(ConfigMap::new()),
    }
}

/// Write config to `.ferry/config.json`.
fn write_config(path: &Path, config: &ConfigMap) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&config)?;
    ferry_store::write_atomic(path, json.as_bytes())?;
    Ok(())
}

/// Parse a string value into an appropriate JSON value (bool/number/string).
fn parse_value(s: &str) -> serde_json::Value {
    match s {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        _ => {
            if let Ok(n) = s.parse::<i64>() {
                serde_json::Value::Number(n.into())
            } else {
                serde_json::Value::String(s.to_string())
            }
        }
    }
}

/// `ferry config set <key> <value>`
///
/// Report keys are checked against [`ReportConfig`] before anything is written.
pub fn set(repo_root: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let paths = require_workspace(repo_root)?;
    let mut config = read_config(&paths.config_json)?;
    config.insert(key.to_string(), parse_value(value));
    let candidate = serde_json::Value::Object(config.clone());
    if let Err(e) = serde_json::from_value::<ReportConfig>(candidate) {
        anyhow::bail!("invalid value for {key}: {e}");
    }
    write_config(&paths.config_json, &config)?;
    println!("{key} = {value}");
    Ok(())
}

/// One effective setting: report keys carry their typed value (the default
/// when unset), other keys pass through as stored.
struct Setting {
    key: String,
    value: serde_json::Value,
    explicit: bool,
}

impl Setting {
    fn render_value(&self) -> String {
        if self.explicit {
            self.value.to_string()
        } else {
            format!("{} (default)", self.value)
        }
    }
}

fn effective_settings(config: &ConfigMap) -> anyhow::Result<Vec<Setting>> {
    let report: ReportConfig = serde_json::from_value(serde_json::Value::Object(config.clone()))?;
    let typed = match serde_json::to_value(&report)? {
        serde_json::Value::Object(map) => map,
        _ => ConfigMap::new(),
    };
    let mut settings: Vec<Setting> = typed
        .iter()
        .map(|(k, v)| Setting {
            key: k.clone(),
            value: v.clone(),
            explicit: config.contains_key(k),
        })
        .collect();
    settings.extend(
        config
            .iter()
            .filter(|(k, _)| !typed.contains_key(*k))
            .map(|(k, v)| Setting {
                key: k.clone(),
                value: v.clone(),
                explicit: true,
            }),
    );
    Ok(settings)
}

fn lookup(config: &ConfigMap, key: &str) -> anyhow::Result<String> {
    let found = effective_settings(config)?.into_iter().find(|s| s.key == key);
    Ok(match found {
        Some(setting) => setting.render_value(),
        None => "(not set)".to_string(),
    })
}

fn list_lines(config: &ConfigMap) -> anyhow::Result<Vec<String>> {
    Ok(effective_settings(config)?
        .iter()
        .map(|s| format!("{} = {}", s.key, s.render_value()))
        .collect())
}

/// `ferry config get <key>`
pub fn get(repo_root: &Path, key: &str) -> anyhow::Result<()> {
    let paths = require_workspace(repo_root)?;
    let config = read_config(&paths.config_json)?;
    println!("{}", lookup(&config, key)?);
    Ok(())
}

/// `ferry config list`
///
/// Report settings are always listed, unset ones marked `(default)`.
pub fn list(repo_root: &Path) -> anyhow::Result<()> {
    let paths = require_workspace(repo_root)?;
    let config = read_config(&paths.config_json)?;
    for line in list_lines(&config)? {
        println!("{line}");
    }
    Ok(())
}
