use crate::core::{Chore, ChoreRepository, Storage};
use crate::utils::error::{ChoreError, Result};
use std::io;

pub const CHORES_FILE_NAME: &str = "chores.json";

/// What reading the chores file actually produced, before it is collapsed
/// into a plain list by [`ChoreRepository::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Parsed(Vec<Chore>),
    NotFound,
    Malformed(String),
    Unreadable(String),
}

impl LoadOutcome {
    pub fn into_chores(self) -> Vec<Chore> {
        match self {
            LoadOutcome::Parsed(chores) => chores,
            LoadOutcome::NotFound => {
                tracing::debug!("{} not found, starting with no chores", CHORES_FILE_NAME);
                Vec::new()
            }
            LoadOutcome::Malformed(reason) => {
                tracing::warn!("⚠️ Ignoring malformed {}: {}", CHORES_FILE_NAME, reason);
                Vec::new()
            }
            LoadOutcome::Unreadable(reason) => {
                tracing::warn!("⚠️ Could not read {}: {}", CHORES_FILE_NAME, reason);
                Vec::new()
            }
        }
    }
}

/// JSON-array repository over a [`Storage`] root; always targets `chores.json`.
pub struct FileChoreRepository<S: Storage> {
    storage: S,
}

impl<S: Storage> FileChoreRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        let data = match self.storage.read_file(CHORES_FILE_NAME) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return LoadOutcome::NotFound,
            Err(e) => return LoadOutcome::Unreadable(e.to_string()),
        };

        match serde_json::from_slice::<Vec<Chore>>(&data) {
            Ok(chores) => LoadOutcome::Parsed(chores),
            Err(e) => LoadOutcome::Malformed(e.to_string()),
        }
    }
}

impl<S: Storage> ChoreRepository for FileChoreRepository<S> {
    fn load(&self) -> Vec<Chore> {
        let chores = self.load_outcome().into_chores();
        tracing::debug!("Loaded {} chores", chores.len());
        chores
    }

    fn save(&self, chores: Option<&[Chore]>) -> Result<bool> {
        let chores = chores.ok_or(ChoreError::EmptyChoreList)?;

        let data = match serde_json::to_vec_pretty(chores) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("❌ Failed to serialize chores: {}", e);
                return Ok(false);
            }
        };

        match self.storage.write_file(CHORES_FILE_NAME, &data) {
            Ok(()) => {
                tracing::debug!("Saved {} chores", chores.len());
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("❌ Failed to write {}: {}", CHORES_FILE_NAME, e);
                Ok(false)
            }
        }
    }
}
