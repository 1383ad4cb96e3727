use crate::config::{ModuleSpec, ProjectConfig};
use crate::domain::ports::FileSystem;
use crate::utils::error::Result;
use crate::utils::validation::validate_module_name;
use std::path::{Path, PathBuf};

/// Fixed layout, created in this order on every run.
pub const BASE_DIRS: [&str; 4] = ["Project", "Libs", "Modules", "Logs"];

/// Marker file content; downstream tooling matches it byte-for-byte.
pub const PROJECT_MARKER_CONTENT: &str = "// MekScript Project File";

pub const MODULE_EXTENSION: &str = "js";

/// What to do with a single target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Skip,
}

/// Skip-if-exists decision, kept separate from the side-effecting write.
pub fn decide(already_exists: bool) -> Action {
    if already_exists {
        Action::Skip
    } else {
        Action::Create
    }
}

/// Idempotently materializes the project tree under `base_dir`.
///
/// Existing directories and files are never touched; every decision is
/// reported on stdout since that is the only success feedback the tool
/// gives. The first filesystem failure aborts the run with no rollback.
pub struct Scaffolder<F: FileSystem> {
    fs: F,
    base_dir: PathBuf,
}

impl<F: FileSystem> Scaffolder<F> {
    pub fn new(fs: F, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            base_dir: base_dir.into(),
        }
    }

    pub fn generate(&self, config: &ProjectConfig) -> Result<()> {
        println!("Generating project structure based on user configuration...");
        tracing::debug!("Target directory: {}", self.base_dir.display());

        for dir in BASE_DIRS {
            self.ensure_directory(&self.base_dir.join(dir))?;
        }

        let config_mirror = format!(
            r#"{{ "name": "{}", "version": "{}" }}"#,
            config.project_name, config.version
        );
        self.ensure_file(&self.base_dir.join("project.mek"), PROJECT_MARKER_CONTENT)?;
        self.ensure_file(&self.base_dir.join("config.mson"), &config_mirror)?;
        self.ensure_file(&self.base_dir.join("Logs").join("project.log"), "")?;

        // 按配置順序寫入模組；重複名稱會被視為已存在而跳過
        for module in &config.modules {
            self.ensure_module(module)?;
        }

        println!(
            "Project structure generated successfully for '{}'.",
            config.project_name
        );
        Ok(())
    }

    fn ensure_directory(&self, path: &Path) -> Result<()> {
        match decide(self.fs.exists(path)) {
            Action::Create => {
                self.fs.create_dir_all(path)?;
                println!("Created directory: {}", path.display());
            }
            Action::Skip => {
                println!("Directory already exists: {}", path.display());
            }
        }
        Ok(())
    }

    fn ensure_file(&self, path: &Path, contents: &str) -> Result<()> {
        match decide(self.fs.exists(path)) {
            Action::Create => {
                self.fs.write_file(path, contents)?;
                println!("Created file: {}", path.display());
            }
            Action::Skip => {
                println!("File already exists: {}", path.display());
            }
        }
        Ok(())
    }

    fn ensure_module(&self, module: &ModuleSpec) -> Result<()> {
        validate_module_name(&module.name)?;

        let path = self
            .base_dir
            .join("Modules")
            .join(format!("{}.{}", module.name, MODULE_EXTENSION));
        self.ensure_file(&path, &module.code)
    }
}
