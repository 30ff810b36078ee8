use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const APP_DIR_NAME: &str = "commitcop";
const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_ORACLE_COMMAND: &str = "gh copilot suggest";
const DEFAULT_ORACLE_PROBE: &str = "gh copilot --version";

pub const ORACLE_ENV: &str = "COMMITCOP_ORACLE";
pub const ORACLE_PROBE_ENV: &str = "COMMITCOP_ORACLE_PROBE";
pub const PUSH_ENV: &str = "COMMITCOP_PUSH";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub oracle_command: CommandLine,
    pub oracle_probe: CommandLine,
    pub push: bool,
    pub workspace_root: PathBuf,
}

/// A program plus its arguments, split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn parse(value: &str) -> AppResult<Self> {
        let mut parts = value.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::Configuration("command line must not be empty".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Values persisted by `commitcop config init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_probe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("could not determine the user config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Self::resolve(&stored, |key| env::var(key).ok(), workspace_hint)
    }

    /// Environment values win over stored ones; defaults fill the rest.
    pub fn resolve(
        stored: &StoredConfig,
        env_lookup: impl Fn(&str) -> Option<String>,
        workspace_hint: &Path,
    ) -> AppResult<Self> {
        let oracle_command = env_lookup(ORACLE_ENV)
            .or_else(|| stored.oracle_command.clone())
            .unwrap_or_else(|| DEFAULT_ORACLE_COMMAND.to_string());
        let oracle_probe = env_lookup(ORACLE_PROBE_ENV)
            .or_else(|| stored.oracle_probe.clone())
            .unwrap_or_else(|| DEFAULT_ORACLE_PROBE.to_string());
        let push = match env_lookup(PUSH_ENV) {
            Some(value) => parse_bool(PUSH_ENV, &value)?,
            None => stored.push.unwrap_or(true),
        };

        Ok(Self {
            oracle_command: CommandLine::parse(&oracle_command)
                .map_err(|_| AppError::Configuration("oracle command is empty".to_string()))?,
            oracle_probe: CommandLine::parse(&oracle_probe)
                .map_err(|_| AppError::Configuration("oracle probe is empty".to_string()))?,
            push,
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}

pub fn parse_bool(field: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Configuration(format!(
            "{field} must be a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolve_with(stored: &StoredConfig, vars: &[(&str, &str)]) -> AppResult<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::resolve(stored, |key| vars.get(key).cloned(), Path::new("/repo"))
    }

    #[test]
    fn defaults_use_gh_copilot_and_push() {
        let config = resolve_with(&StoredConfig::default(), &[]).unwrap();
        assert_eq!(config.oracle_command.to_string(), "gh copilot suggest");
        assert_eq!(config.oracle_probe.program, "gh");
        assert_eq!(config.oracle_probe.args, vec!["copilot", "--version"]);
        assert!(config.push);
        assert_eq!(config.workspace_root, PathBuf::from("/repo"));
    }

    #[test]
    fn environment_overrides_stored_values() {
        let stored = StoredConfig {
            oracle_command: Some("stored-tool suggest".to_string()),
            oracle_probe: None,
            push: Some(true),
        };
        let config = resolve_with(
            &stored,
            &[(ORACLE_ENV, "env-tool  --quiet"), (PUSH_ENV, "off")],
        )
        .unwrap();
        assert_eq!(config.oracle_command.program, "env-tool");
        assert_eq!(config.oracle_command.args, vec!["--quiet"]);
        assert!(!config.push);
    }

    #[test]
    fn stored_values_override_defaults() {
        let stored = StoredConfig {
            oracle_command: None,
            oracle_probe: Some("my-ai --help".to_string()),
            push: Some(false),
        };
        let config = resolve_with(&stored, &[]).unwrap();
        assert_eq!(config.oracle_probe.to_string(), "my-ai --help");
        assert!(!config.push);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = resolve_with(&StoredConfig::default(), &[(PUSH_ENV, "maybe")]).unwrap_err();
        assert!(err.to_string().contains("COMMITCOP_PUSH must be a boolean"));

        let err = resolve_with(&StoredConfig::default(), &[(ORACLE_ENV, "   ")]).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn stored_config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        assert_eq!(StoredConfig::load_from(&path).unwrap(), StoredConfig::default());

        let stored = StoredConfig {
            oracle_command: Some("gh copilot suggest -t shell".to_string()),
            oracle_probe: None,
            push: Some(false),
        };
        stored.save_to(&path).unwrap();
        assert_eq!(StoredConfig::load_from(&path).unwrap(), stored);
    }

    #[test]
    fn malformed_config_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        let err = StoredConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
