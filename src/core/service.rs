use crate::core::{Chore, ChoreFilter, ChoreRepository, ChoreSummary};
use crate::utils::error::{ChoreError, Result};
use chrono::NaiveDate;

/// In-memory chore list with the business rules applied on top of a
/// [`ChoreRepository`]. Nothing is persisted until [`ChoreService::save_chores`].
pub struct ChoreService<R: ChoreRepository> {
    repository: R,
    chores: Vec<Chore>,
}

impl<R: ChoreRepository> ChoreService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            chores: Vec::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    pub fn load_chores(&mut self) -> usize {
        self.chores = self.repository.load();
        self.chores.len()
    }

    pub fn save_chores(&self) -> Result<bool> {
        self.repository.save(Some(self.chores.as_slice()))
    }

    pub fn add_chore(
        &mut self,
        description: &str,
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> Result<&Chore> {
        let description = Self::validate(description, deadline, today)?;
        self.ensure_unique(description, deadline, None)?;

        self.chores.push(Chore::new(description, false, deadline));
        tracing::info!("➕ Added chore '{}' due {}", description, deadline);
        Ok(&self.chores[self.chores.len() - 1])
    }

    pub fn delete_chore(&mut self, description: &str, deadline: NaiveDate) -> Result<Chore> {
        let index = self.position(description, deadline)?;
        let removed = self.chores.remove(index);
        tracing::info!("🗑️ Deleted chore '{}'", removed.description);
        Ok(removed)
    }

    /// 已完成且過期的家事不能再改回未完成
    pub fn toggle_chore(
        &mut self,
        description: &str,
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> Result<&Chore> {
        let index = self.position(description, deadline)?;
        let chore = &mut self.chores[index];

        if chore.done && chore.deadline < today {
            return Err(ChoreError::ToggleChoreWithInvalidDeadline {
                description: chore.description.clone(),
                deadline: chore.deadline,
            });
        }

        chore.done = !chore.done;
        tracing::info!("🔁 Chore '{}' done = {}", chore.description, chore.done);
        Ok(&self.chores[index])
    }

    pub fn edit_chore(
        &mut self,
        description: &str,
        deadline: NaiveDate,
        new_description: Option<&str>,
        new_deadline: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<&Chore> {
        let index = self.position(description, deadline)?;

        // 只檢查有變更的欄位；過期家事仍可改名
        let target_description = match new_description {
            Some(d) => Self::validate_description(d)?.to_string(),
            None => self.chores[index].description.clone(),
        };
        let target_deadline = match new_deadline {
            Some(d) => Self::validate_deadline(d, today)?,
            None => self.chores[index].deadline,
        };
        self.ensure_unique(&target_description, target_deadline, Some(index))?;

        let chore = &mut self.chores[index];
        chore.description = target_description;
        chore.deadline = target_deadline;
        tracing::info!("✏️ Edited chore '{}' due {}", chore.description, chore.deadline);
        Ok(&self.chores[index])
    }

    pub fn filter_chores(&self, filter: ChoreFilter) -> Vec<&Chore> {
        self.chores.iter().filter(|c| filter.accepts(c)).collect()
    }

    pub fn overdue_chores(&self, today: NaiveDate) -> Vec<&Chore> {
        self.chores.iter().filter(|c| c.is_overdue(today)).collect()
    }

    pub fn summary(&self, today: NaiveDate) -> ChoreSummary {
        let completed = self.chores.iter().filter(|c| c.done).count();
        ChoreSummary {
            total: self.chores.len(),
            completed,
            pending: self.chores.len() - completed,
            overdue: self.overdue_chores(today).len(),
        }
    }

    fn validate(description: &str, deadline: NaiveDate, today: NaiveDate) -> Result<&str> {
        let description = Self::validate_description(description)?;
        Self::validate_deadline(deadline, today)?;
        Ok(description)
    }

    fn validate_description(description: &str) -> Result<&str> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ChoreError::InvalidDescription);
        }
        Ok(description)
    }

    fn validate_deadline(deadline: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
        if deadline < today {
            return Err(ChoreError::InvalidDeadline { deadline, today });
        }
        Ok(deadline)
    }

    fn ensure_unique(
        &self,
        description: &str,
        deadline: NaiveDate,
        skip: Option<usize>,
    ) -> Result<()> {
        let duplicated = self
            .chores
            .iter()
            .enumerate()
            .any(|(i, c)| Some(i) != skip && c.matches(description, deadline));

        if duplicated {
            return Err(ChoreError::DuplicatedChore {
                description: description.to_string(),
                deadline,
            });
        }
        Ok(())
    }

    fn position(&self, description: &str, deadline: NaiveDate) -> Result<usize> {
        if self.chores.is_empty() {
            return Err(ChoreError::EmptyChoreList);
        }
        self.chores
            .iter()
            .position(|c| c.matches(description, deadline))
            .ok_or_else(|| ChoreError::ChoreNotFound {
                description: description.trim().to_string(),
                deadline,
            })
    }
}
