use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::bumper::{VersionBumper, DEFAULT_MARKERS};
use crate::error::{BumpError, Result};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "assembly-bump.toml";

/// Represents the complete configuration for assembly-bump.
///
/// Names the file to rewrite and the marker substrings that identify
/// version-declaration lines.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_file")]
    pub file: PathBuf,

    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

/// Returns the default target file, relative to the working directory.
fn default_file() -> PathBuf {
    PathBuf::from("src/SharedAssemblyInfo.cs")
}

/// Returns the default marker list.
fn default_markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: default_file(),
            markers: default_markers(),
        }
    }
}

impl Config {
    /// Reject marker lists that could never match a declaration line.
    pub fn validate(&self) -> Result<()> {
        if self.markers.is_empty() {
            return Err(BumpError::config("markers must not be empty"));
        }
        for marker in &self.markers {
            if marker.is_empty() {
                return Err(BumpError::config("markers must not contain an empty string"));
            }
            if marker.contains('"') {
                return Err(BumpError::config(format!(
                    "marker '{}' must not contain a quote character",
                    marker
                )));
            }
        }
        Ok(())
    }

    pub fn bumper(&self) -> VersionBumper {
        VersionBumper::new(self.markers.clone())
    }
}

/// Parse configuration text, validating the result.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| BumpError::config(format!("invalid TOML: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `assembly-bump.toml` in current directory
/// 3. `.assembly-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config() {
            Some(path) => path,
            None => {
                tracing::debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&content)
        .map_err(|e| BumpError::config(format!("{}: {}", path.display(), config_message(e))))
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join(format!(".{}", CONFIG_FILE_NAME));
    user.exists().then_some(user)
}

fn config_message(err: BumpError) -> String {
    match err {
        BumpError::Config(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.file, PathBuf::from("src/SharedAssemblyInfo.cs"));
        assert_eq!(config.markers, vec!["AssemblyVersion", "AssemblyFileVersion"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config("file = \"Properties/AssemblyInfo.cs\"\n").unwrap();
        assert_eq!(config.file, PathBuf::from("Properties/AssemblyInfo.cs"));
        assert_eq!(config.markers, default_markers());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_empty_markers() {
        let err = parse_config("markers = []").unwrap_err();
        assert!(err.to_string().contains("markers must not be empty"));
    }

    #[test]
    fn test_parse_rejects_quoted_marker() {
        let err = parse_config(r#"markers = ["Assembly\"Version"]"#).unwrap_err();
        assert!(err.to_string().contains("quote character"));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_config("branches = 3").is_err());
    }

    #[test]
    fn test_bumper_uses_configured_markers() {
        let config = parse_config(r#"markers = ["InformationalVersion"]"#).unwrap();
        assert_eq!(config.bumper().markers(), ["InformationalVersion".to_string()]);
    }
}
