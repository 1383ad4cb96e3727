use crate::utils::error::Result;
use std::path::Path;

/// Filesystem port so scaffolding decisions can be exercised against an
/// in-memory double in tests.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        (**self).create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write_file(path, contents)
    }
}
