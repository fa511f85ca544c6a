pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{ChoresConfig, Settings};
#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::core::{
    repository::{FileChoreRepository, LoadOutcome, CHORES_FILE_NAME},
    service::ChoreService,
    Chore, ChoreFilter, ChoreRepository,
};
pub use crate::utils::error::{ChoreError, Result};
