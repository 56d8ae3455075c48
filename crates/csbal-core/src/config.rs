use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::SearchStrategy;

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "csbal.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineSection {
    #[serde(default)]
    pub strategy: Option<SearchStrategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSection {
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub strategy: Option<SearchStrategy>,
}

/// The merged view a command actually runs with.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub project: ProjectConfig,
    pub user: UserConfig,
    pub strategy: SearchStrategy,
}

/// Errors from loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load `csbal.toml` from the project root, defaulting when absent.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
/// [`ConfigError::Parse`] if it is not valid config TOML.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = project_root.join(PROJECT_CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no project config, using defaults");
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    toml::from_str::<ProjectConfig>(&content)
        .map_err(|source| ConfigError::Parse { path, source })
}

/// Load the per-user config from the platform config directory.
///
/// Missing directory or file both resolve to the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
/// [`ConfigError::Parse`] if it is not valid config TOML.
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("csbal/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    toml::from_str::<UserConfig>(&content)
        .map_err(|source| ConfigError::Parse { path, source })
}

/// Merge project and user config with a CLI override into one effective view.
///
/// # Errors
///
/// Returns [`ConfigError`] if either config file loads but does not parse.
pub fn resolve_config(
    project_root: &Path,
    cli_strategy: Option<SearchStrategy>,
) -> Result<EffectiveConfig, ConfigError> {
    let project = load_project_config(project_root)?;
    let user = load_user_config()?;
    let strategy = resolve_strategy(cli_strategy, project.engine.strategy, user.strategy);
    tracing::debug!(strategy = %strategy, "effective config resolved");

    Ok(EffectiveConfig {
        project,
        user,
        strategy,
    })
}

/// Strategy precedence, highest wins: CLI flag, project config, user config,
/// built-in default.
#[must_use]
pub fn resolve_strategy(
    cli: Option<SearchStrategy>,
    project: Option<SearchStrategy>,
    user: Option<SearchStrategy>,
) -> SearchStrategy {
    cli.or(project).or(user).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(toml_text: &str) -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), toml_text).expect("write config");
        dir
    }

    #[test]
    fn missing_project_config_uses_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let cfg = load_project_config(dir.path()).expect("load should succeed");
        assert!(cfg.engine.strategy.is_none());
        assert!(cfg.output.format.is_none());
    }

    #[test]
    fn project_config_parses_engine_section() {
        let dir =
            write_project_config("[engine]\nstrategy = \"scan\"\n\n[output]\nformat = \"json\"\n");

        let cfg = load_project_config(dir.path()).expect("load should succeed");
        assert_eq!(cfg.engine.strategy, Some(SearchStrategy::Scan));
        assert_eq!(cfg.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = write_project_config("[engine\nstrategy =");

        let err = load_project_config(dir.path()).expect_err("load should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_strategy_value_is_parse_error() {
        let dir = write_project_config("[engine]\nstrategy = \"binary\"\n");

        let err = load_project_config(dir.path()).expect_err("load should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn cli_strategy_wins_over_configs() {
        let resolved = resolve_strategy(
            Some(SearchStrategy::Scan),
            Some(SearchStrategy::LowerBound),
            Some(SearchStrategy::LowerBound),
        );
        assert_eq!(resolved, SearchStrategy::Scan);
    }

    #[test]
    fn project_strategy_beats_user_strategy() {
        let resolved = resolve_strategy(None, Some(SearchStrategy::Scan), None);
        assert_eq!(resolved, SearchStrategy::Scan);

        let resolved = resolve_strategy(
            None,
            Some(SearchStrategy::Scan),
            Some(SearchStrategy::LowerBound),
        );
        assert_eq!(resolved, SearchStrategy::Scan);
    }

    #[test]
    fn strategy_defaults_to_lower_bound_when_unset() {
        assert_eq!(
            resolve_strategy(None, None, None),
            SearchStrategy::LowerBound
        );
    }

    #[test]
    fn user_config_parses_both_fields() {
        let content = "output = \"text\"\nstrategy = \"lower-bound\"\n";
        let cfg: UserConfig = toml::from_str(content).expect("parse");
        assert_eq!(cfg.output.as_deref(), Some("text"));
        assert_eq!(cfg.strategy, Some(SearchStrategy::LowerBound));
    }
}
