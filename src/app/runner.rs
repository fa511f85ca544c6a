use crate::adapters::storage::LocalStorage;
use crate::config::{Command, Settings};
use crate::core::export::export_delimited;
use crate::core::repository::FileChoreRepository;
use crate::core::service::ChoreService;
use crate::core::{Chore, ChoreFilter, ChoreRepository, ConfigProvider};
use crate::utils::error::{ChoreError, Result};
use chrono::{Days, NaiveDate};

/// What a command produced; the binary decides where each variant goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Read-only output for stdout.
    Printed(String),
    /// A mutation that reached disk.
    Saved(String),
    /// The mutation was applied in memory but the write failed.
    SaveFailed,
}

pub struct ChoreApp<R: ChoreRepository> {
    service: ChoreService<R>,
    settings: Settings,
}

impl ChoreApp<FileChoreRepository<LocalStorage>> {
    pub fn open(settings: Settings) -> Self {
        let storage = LocalStorage::new(settings.data_dir());
        Self::new(FileChoreRepository::new(storage), settings)
    }
}

impl<R: ChoreRepository> ChoreApp<R> {
    pub fn new(repository: R, settings: Settings) -> Self {
        let mut service = ChoreService::new(repository);
        let loaded = service.load_chores();
        tracing::debug!("📋 {} chores loaded from {}", loaded, settings.data_dir());
        Self { service, settings }
    }

    pub fn service(&self) -> &ChoreService<R> {
        &self.service
    }

    pub fn run(&mut self, command: &Command, today: NaiveDate) -> Result<Outcome> {
        match command {
            Command::List { filter } => {
                Ok(Outcome::Printed(self.render_list((*filter).into(), today)))
            }
            Command::Add {
                description,
                deadline,
            } => {
                let deadline = parse_date("deadline", deadline, today)?;
                let chore = self.service.add_chore(description, deadline, today)?;
                let message = format!("Added '{}' due {}", chore.description, chore.deadline);
                self.persist(message)
            }
            Command::Toggle {
                description,
                deadline,
            } => {
                let deadline = parse_date("deadline", deadline, today)?;
                let chore = self.service.toggle_chore(description, deadline, today)?;
                let state = if chore.done { "done" } else { "pending" };
                let message = format!("Marked '{}' as {}", chore.description, state);
                self.persist(message)
            }
            Command::Edit {
                description,
                deadline,
                new_description,
                new_deadline,
            } => {
                let deadline = parse_date("deadline", deadline, today)?;
                let new_deadline = new_deadline
                    .as_deref()
                    .map(|d| parse_date("new_deadline", d, today))
                    .transpose()?;
                let chore = self.service.edit_chore(
                    description,
                    deadline,
                    new_description.as_deref(),
                    new_deadline,
                    today,
                )?;
                let message = format!("Updated '{}' due {}", chore.description, chore.deadline);
                self.persist(message)
            }
            Command::Delete {
                description,
                deadline,
            } => {
                let deadline = parse_date("deadline", deadline, today)?;
                let removed = self.service.delete_chore(description, deadline)?;
                self.persist(format!("Deleted '{}'", removed.description))
            }
            Command::Export { format, output } => {
                let text = export_delimited(self.service.chores(), (*format).into())?;
                match output {
                    Some(path) => {
                        std::fs::write(path, text)?;
                        let count = self.service.chores().len();
                        tracing::info!("📁 Exported {} chores to {}", count, path);
                        Ok(Outcome::Printed(format!("Exported {} chores to {}", count, path)))
                    }
                    None => Ok(Outcome::Printed(text)),
                }
            }
        }
    }

    fn persist(&self, message: String) -> Result<Outcome> {
        if self.service.save_chores()? {
            Ok(Outcome::Saved(message))
        } else {
            Ok(Outcome::SaveFailed)
        }
    }

    fn render_list(&self, filter: ChoreFilter, today: NaiveDate) -> String {
        let chores = self.service.filter_chores(filter);
        if chores.is_empty() {
            return "No chores found.".to_string();
        }

        let mut lines: Vec<String> = chores
            .iter()
            .map(|chore| self.render_chore(chore, today))
            .collect();

        let summary = self.service.summary(today);
        lines.push(format!(
            "{} chores: {} done, {} pending, {} overdue",
            summary.total, summary.completed, summary.pending, summary.overdue
        ));
        lines.join("\n")
    }

    fn render_chore(&self, chore: &Chore, today: NaiveDate) -> String {
        let mark = if chore.done { "[x]" } else { "[ ]" };
        let overdue = if chore.is_overdue(today) {
            " (overdue)"
        } else {
            ""
        };
        format!(
            "{} {}  {}{}",
            mark,
            chore.deadline.format(self.settings.date_format()),
            chore.description,
            overdue
        )
    }
}

/// 接受 YYYY-MM-DD、`today`、`tomorrow`
pub fn parse_date(field: &str, value: &str, today: NaiveDate) -> Result<NaiveDate> {
    match value.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| invalid_date(field, value, "Date out of range")),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|e| invalid_date(field, value, &e.to_string())),
    }
}

fn invalid_date(field: &str, value: &str, reason: &str) -> ChoreError {
    ChoreError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("{} (expected YYYY-MM-DD, today or tomorrow)", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_parse_date_shortcuts() {
        assert_eq!(parse_date("deadline", "today", today()).unwrap(), today());
        assert_eq!(
            parse_date("deadline", "Tomorrow", today()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert_eq!(
            parse_date("deadline", "2026-12-01", today()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("deadline", "next week", today()).unwrap_err();
        assert!(matches!(
            err,
            ChoreError::InvalidConfigValueError { ref field, .. } if field == "deadline"
        ));
        assert!(parse_date("deadline", "2026-13-01", today()).is_err());
    }
}
