//! surveykit configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level surveykit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveykitConfig {
    /// Fixture to load when none is given on the command line.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
    /// Survey id to report, overriding the fixture's own id.
    #[serde(default)]
    pub survey_id: Option<u32>,
    /// Output directory for completion reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default `tracing` filter directive.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./surveykit-results")
}

fn default_log_filter() -> String {
    "surveykit=info".to_string()
}

impl Default for SurveykitConfig {
    fn default() -> Self {
        Self {
            fixture: None,
            survey_id: None,
            output_dir: default_output_dir(),
            log_filter: default_log_filter(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `surveykit.toml` in the current directory
/// 2. `~/.config/surveykit/config.toml`
///
/// Environment variable override: `SURVEYKIT_FIXTURE`.
pub fn load_config() -> Result<SurveykitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SurveykitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("surveykit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SurveykitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SurveykitConfig::default(),
    };

    if let Ok(fixture) = std::env::var("SURVEYKIT_FIXTURE") {
        config.fixture = Some(PathBuf::from(fixture));
    }

    config.fixture = config.fixture.as_deref().map(resolve_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("surveykit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_SURVEYKIT_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_SURVEYKIT_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_SURVEYKIT_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_SURVEYKIT_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = SurveykitConfig::default();
        assert_eq!(config.log_filter, "surveykit=info");
        assert_eq!(config.output_dir, PathBuf::from("./surveykit-results"));
        assert!(config.fixture.is_none());
    }

    #[test]
    fn load_explicit_config() {
        std::env::set_var("_SURVEYKIT_TEST_DIR", "/tmp/surveys");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surveykit.toml");
        std::fs::write(
            &path,
            r#"
fixture = "${_SURVEYKIT_TEST_DIR}/demo.json"
survey_id = 7
log_filter = "surveykit=debug"
"#,
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        std::env::remove_var("_SURVEYKIT_TEST_DIR");

        assert_eq!(config.survey_id, Some(7));
        assert_eq!(config.log_filter, "surveykit=debug");
        if std::env::var("SURVEYKIT_FIXTURE").is_err() {
            assert_eq!(config.fixture, Some(PathBuf::from("/tmp/surveys/demo.json")));
        }
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_from(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
