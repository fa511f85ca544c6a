use crate::utils::error::{ChoreError, Result};
use chrono::NaiveDate;
use std::fmt::Write;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ChoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ChoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 用範例日期實際格式化一次；未知或需要時間的指定符 (%H、%M…) 都會失敗
pub fn validate_date_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    let mut sample = String::new();
    if write!(sample, "{}", NaiveDate::MIN.format(format)).is_err() {
        return Err(ChoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Format must only use date specifiers".to_string(),
        });
    }
    Ok(())
}
