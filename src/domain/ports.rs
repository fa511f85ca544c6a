use crate::domain::model::Chore;
use crate::utils::error::Result;

/// Byte-level access to files under a storage root.
pub trait Storage {
    fn read_file(&self, path: &str) -> std::io::Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> std::io::Result<()>;
}

/// Whole-collection persistence for chores.
///
/// `load` never fails: a missing or unreadable source yields an empty list.
/// `save(None)` is a caller error (`ChoreError::EmptyChoreList`), while a
/// failed write is reported as `Ok(false)`.
pub trait ChoreRepository {
    fn load(&self) -> Vec<Chore>;
    fn save(&self, chores: Option<&[Chore]>) -> Result<bool>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn date_format(&self) -> &str;
}
