pub mod scaffold;

pub use crate::domain::ports::FileSystem;
pub use crate::utils::error::Result;
pub use scaffold::{Action, Scaffolder};
