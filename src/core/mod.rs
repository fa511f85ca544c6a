pub mod export;
pub mod repository;
pub mod service;

pub use crate::domain::model::{Chore, ChoreFilter, ChoreSummary};
pub use crate::domain::ports::{ChoreRepository, ConfigProvider, Storage};
pub use crate::utils::error::Result;
