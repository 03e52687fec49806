//! Application configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[serde(default)]` on every section means a config file only has to
//! mention what it changes; everything else falls back to `Default`.
//!
//! The file is read, never written: ObjectWriter keeps no state of its own
//! between runs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interpreter used by the preview runner
    pub interpreter: InterpreterConfig,

    /// Packaging tool and its fixed template values
    pub packaging: PackagingConfig,

    /// Command that installs the packaging tool
    pub installer: InstallerConfig,

    /// Editor appearance
    pub editor: EditorConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("objectwriter").join("config.toml"))
    }
}

/// How preview runs a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Interpreter executable
    pub program: String,

    /// Flag that makes the interpreter take its program as an argument
    pub inline_flag: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            inline_flag: "-c".to_string(),
        }
    }
}

/// Packaging tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingConfig {
    /// Packaging executable
    pub tool: String,

    /// Flag used to probe whether the tool is installed
    pub version_flag: String,

    /// Name given to the produced executable
    pub output_name: String,

    /// Bundle into a single file
    pub onefile: bool,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            tool: "pyinstaller".to_string(),
            version_flag: "--version".to_string(),
            output_name: "ObjectWriter".to_string(),
            onefile: true,
        }
    }
}

/// Installer invoked when the packaging tool is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec![
                "-m".to_string(),
                "pip".to_string(),
                "install".to_string(),
                "pyinstaller".to_string(),
            ],
        }
    }
}

/// Editor appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in points
    pub font_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.interpreter.program, "python");
        assert_eq!(config.interpreter.inline_flag, "-c");
        assert_eq!(config.packaging.tool, "pyinstaller");
        assert_eq!(config.packaging.output_name, "ObjectWriter");
        assert_eq!(config.installer.args.join(" "), "-m pip install pyinstaller");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [interpreter]
            program = "python3"

            [editor]
            font_size = 16.0
            "#,
        )
        .unwrap();

        assert_eq!(config.interpreter.program, "python3");
        assert_eq!(config.interpreter.inline_flag, "-c");
        assert_eq!(config.editor.font_size, 16.0);
        assert_eq!(config.packaging, PackagingConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[packaging]\noutput_name = \"MyTool\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.packaging.output_name, "MyTool");
        assert_eq!(config.packaging.tool, "pyinstaller");
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[packaging\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
