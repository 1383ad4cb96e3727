pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalFileSystem;
pub use config::{cli::CliArgs, ModuleSpec, ProjectConfig};
pub use crate::core::scaffold::{Action, Scaffolder};
pub use utils::error::{Result, ScaffoldError};
