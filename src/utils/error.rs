use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChoreError {
    #[error("Chore list is absent")]
    EmptyChoreList,

    #[error("Chore description cannot be empty")]
    InvalidDescription,

    #[error("Invalid deadline {deadline}: must not be before {today}")]
    InvalidDeadline { deadline: NaiveDate, today: NaiveDate },

    #[error("Chore '{description}' due {deadline} already exists")]
    DuplicatedChore {
        description: String,
        deadline: NaiveDate,
    },

    #[error("Chore '{description}' due {deadline} not found")]
    ChoreNotFound {
        description: String,
        deadline: NaiveDate,
    },

    #[error("Cannot reopen completed chore '{description}': deadline {deadline} has passed")]
    ToggleChoreWithInvalidDeadline {
        description: String,
        deadline: NaiveDate,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端沒有提供資料
    Argument,
    /// 業務規則不成立
    Domain,
    Storage,
    Configuration,
}

impl ChoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChoreError::EmptyChoreList => ErrorCategory::Argument,
            ChoreError::InvalidDescription
            | ChoreError::InvalidDeadline { .. }
            | ChoreError::DuplicatedChore { .. }
            | ChoreError::ChoreNotFound { .. }
            | ChoreError::ToggleChoreWithInvalidDeadline { .. } => ErrorCategory::Domain,
            ChoreError::IoError(_) | ChoreError::CsvError(_) => ErrorCategory::Storage,
            ChoreError::ConfigError { .. } | ChoreError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChoreError::EmptyChoreList => "There are no chores to work with.".to_string(),
            ChoreError::IoError(e) => format!("Could not access the chores file: {}", e),
            ChoreError::CsvError(_) => "Could not format the chore list.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ChoreError::EmptyChoreList => "Add a chore first with `chorelist add`",
            ChoreError::InvalidDescription => "Provide a non-blank description",
            ChoreError::InvalidDeadline { .. } => "Use today or a future date (YYYY-MM-DD)",
            ChoreError::DuplicatedChore { .. } => "Use a different description or deadline",
            ChoreError::ChoreNotFound { .. } => "Run `chorelist list` to see existing chores",
            ChoreError::ToggleChoreWithInvalidDeadline { .. } => {
                "Edit the deadline before reopening the chore"
            }
            ChoreError::IoError(_) => "Check that the data directory exists and is writable",
            ChoreError::CsvError(_) => "Retry the export with a different format",
            ChoreError::ConfigError { .. } | ChoreError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Argument | ErrorCategory::Domain => 2,
            ErrorCategory::Storage => 1,
            ErrorCategory::Configuration => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChoreError>;
