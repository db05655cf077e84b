//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed schema, defaults filled in
    pub schema: ConfigSchema,
    /// Path the schema was loaded from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults.
    ///
    /// With an explicit `path`, a missing file is an error. Without one,
    /// standard candidate locations are probed and absence means defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
            let schema = load_config_file(p)?;
            return Ok(Self {
                schema,
                path: Some(p.to_string()),
            });
        }

        match find_config_file() {
            Some(p) => {
                let schema = load_config_file(&p)?;
                Ok(Self {
                    schema,
                    path: Some(p),
                })
            }
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".find7.toml", "find7.toml", ".config/find7.toml"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.page_size, 12);
    }

    #[test]
    fn test_config_load_no_file() {
        let config = Config::load(None);
        assert!(config.is_ok());
    }

    #[test]
    fn test_config_load_explicit_missing() {
        let err = Config::load(Some("/nonexistent/find7.toml")).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\npage_size = 6\ndebounce_ms = 150").unwrap();

        let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.schema.search.page_size, 6);
        assert_eq!(config.schema.search.debounce_ms, 150);
        assert_eq!(config.schema.search.suggest_debounce_ms, 180);
    }
}
