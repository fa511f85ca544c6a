pub mod runner;

pub use runner::{ChoreApp, Outcome};
