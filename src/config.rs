use crate::dataset::DEFAULT_DELIMITER;
use crate::grouping::{DEFAULT_INDENT, EXPORT_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "roomcount.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    // CSV field separator, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            indent: default_indent(),
        }
    }
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER as char
}

fn default_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    InvalidDelimiter(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Failed to read config: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidDelimiter(c) => {
                write!(f, "Delimiter must be a single ASCII character, got '{}'", c)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.delimiter()?;
        Ok(config)
    }

    /// Explicit path must exist; otherwise fall back to `roomcount.toml` if present
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn delimiter(&self) -> Result<u8, ConfigError> {
        let c = self.input.delimiter;
        if c.is_ascii() {
            Ok(c as u8)
        } else {
            Err(ConfigError::InvalidDelimiter(c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.delimiter().unwrap(), b',');
        assert_eq!(config.export.file_name, "grouped_projects.json");
        assert_eq!(config.export.indent, 4);
    }

    #[test]
    fn test_overrides() {
        let config = Config::load_from_str(
            r#"
[input]
delimiter = ";"

[export]
file_name = "rooms.json"
indent = 2
"#,
        )
        .unwrap();

        assert_eq!(config.delimiter().unwrap(), b';');
        assert_eq!(config.export.file_name, "rooms.json");
        assert_eq!(config.export.indent, 2);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = Config::load_from_str("[input]\ndelimiter = \"§\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelimiter('§')));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Config::load_from_str("[export\nindent = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::resolve(Some(&missing)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\nindent = 8").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.export.indent, 8);
        assert_eq!(config.delimiter().unwrap(), b',');
    }
}
