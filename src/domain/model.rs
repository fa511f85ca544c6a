use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single chore as stored in `chores.json`.
///
/// `deadline` serializes as an ISO-8601 calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub description: String,
    pub done: bool,
    pub deadline: NaiveDate,
}

impl Chore {
    pub fn new(description: impl Into<String>, done: bool, deadline: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done,
            deadline,
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.deadline < today
    }

    /// 描述忽略大小寫與前後空白
    pub fn matches(&self, description: &str, deadline: NaiveDate) -> bool {
        self.deadline == deadline
            && self.description.trim().to_lowercase() == description.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoreFilter {
    #[default]
    All,
    Completed,
    Uncompleted,
}

impl ChoreFilter {
    pub fn accepts(&self, chore: &Chore) -> bool {
        match self {
            ChoreFilter::All => true,
            ChoreFilter::Completed => chore.done,
            ChoreFilter::Uncompleted => !chore.done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChoreSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_chore_json_shape() {
        let chore = Chore::new("Laundry", false, date(2026, 10, 15));
        let json = serde_json::to_value(&chore).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"description": "Laundry", "done": false, "deadline": "2026-10-15"})
        );
    }

    #[test]
    fn test_overdue_only_when_pending_and_past() {
        let today = date(2026, 10, 15);
        assert!(Chore::new("a", false, date(2026, 10, 14)).is_overdue(today));
        assert!(!Chore::new("b", true, date(2026, 10, 14)).is_overdue(today));
        assert!(!Chore::new("c", false, today).is_overdue(today));
    }

    #[test]
    fn test_matches_ignores_case_and_padding() {
        let chore = Chore::new("Wash Dishes", false, date(2026, 10, 15));
        assert!(chore.matches("  wash dishes ", date(2026, 10, 15)));
        assert!(!chore.matches("wash dishes", date(2026, 10, 16)));
    }

    #[test]
    fn test_filter_accepts() {
        let done = Chore::new("a", true, date(2026, 1, 1));
        let pending = Chore::new("b", false, date(2026, 1, 1));
        assert!(ChoreFilter::All.accepts(&done) && ChoreFilter::All.accepts(&pending));
        assert!(ChoreFilter::Completed.accepts(&done));
        assert!(!ChoreFilter::Completed.accepts(&pending));
        assert!(ChoreFilter::Uncompleted.accepts(&pending));
    }
}
