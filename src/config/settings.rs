use crate::config::toml_config::ChoresConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_date_format, validate_path, Validate};

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Effective settings after merging flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: String,
    pub date_format: String,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    /// 優先順序：命令列 > 設定檔 > 預設值
    pub fn merge(
        file: Option<&ChoresConfig>,
        data_dir: Option<&str>,
        verbose: bool,
        json_logs: bool,
    ) -> Self {
        let defaults = Settings::default();

        Self {
            data_dir: data_dir
                .or_else(|| file.and_then(|f| f.data_dir()))
                .map(str::to_string)
                .unwrap_or(defaults.data_dir),
            date_format: file
                .and_then(|f| f.date_format())
                .map(str::to_string)
                .unwrap_or(defaults.date_format),
            verbose: verbose || file.and_then(|f| f.verbose()).unwrap_or(false),
            json_logs: json_logs || file.and_then(|f| f.json_logs()).unwrap_or(false),
        }
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_date_format("date_format", &self.date_format)
    }
}
