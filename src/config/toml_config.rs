use crate::utils::error::{ChoreError, Result};
use crate::utils::validation::{validate_date_format, validate_path, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "chorelist.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoresConfig {
    pub storage: Option<StorageConfig>,
    pub logging: Option<LoggingConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub date_format: Option<String>,
}

impl ChoresConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ChoreError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ChoreError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ChoreError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_dir(&self) -> Option<&str> {
        self.storage.as_ref()?.data_dir.as_deref()
    }

    pub fn verbose(&self) -> Option<bool> {
        self.logging.as_ref()?.verbose
    }

    pub fn json_logs(&self) -> Option<bool> {
        self.logging.as_ref()?.json
    }

    pub fn date_format(&self) -> Option<&str> {
        self.display.as_ref()?.date_format.as_deref()
    }
}

impl Validate for ChoresConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = self.data_dir() {
            validate_path("storage.data_dir", dir)?;
        }
        if let Some(format) = self.date_format() {
            validate_date_format("display.date_format", format)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
data_dir = "/tmp/chores"

[logging]
verbose = true
json = false

[display]
date_format = "%d/%m/%Y"
"#;

        let config = ChoresConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_dir(), Some("/tmp/chores"));
        assert_eq!(config.verbose(), Some(true));
        assert_eq!(config.json_logs(), Some(false));
        assert_eq!(config.date_format(), Some("%d/%m/%Y"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ChoresConfig::from_toml_str("").unwrap();
        assert!(config.data_dir().is_none());
        assert!(config.date_format().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CHORELIST_TEST_DATA_DIR", "/srv/chores");

        let config = ChoresConfig::from_toml_str(
            r#"
[storage]
data_dir = "${CHORELIST_TEST_DATA_DIR}/home"
"#,
        )
        .unwrap();
        assert_eq!(config.data_dir(), Some("/srv/chores/home"));

        std::env::remove_var("CHORELIST_TEST_DATA_DIR");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let config = ChoresConfig::from_toml_str(
            r#"
[storage]
data_dir = "${CHORELIST_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.data_dir(), Some("${CHORELIST_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_config_validation() {
        let config = ChoresConfig::from_toml_str(
            r#"
[display]
date_format = "%Q"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = ChoresConfig::from_toml_str(
            r#"
[storage]
data_dir = ""
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ChoresConfig::from_toml_str("[storage\ndata_dir = 1").unwrap_err();
        assert!(matches!(err, ChoreError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\ndata_dir = \"./data\"\n")
            .unwrap();

        let config = ChoresConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_dir(), Some("./data"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ChoresConfig::from_file("/definitely/not/here/chorelist.toml").unwrap_err();
        assert!(matches!(err, ChoreError::ConfigError { .. }));
    }
}
