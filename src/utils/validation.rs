use crate::utils::error::{Result, ScaffoldError};

/// Rejects module names that would place the file outside the Modules
/// directory. The name is used as a filename stem, so separators and
/// traversal components are not allowed.
pub fn validate_module_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::InvalidModuleName {
            name: name.to_string(),
            reason: "name cannot be empty or whitespace-only".to_string(),
        });
    }

    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(ScaffoldError::InvalidModuleName {
            name: name.to_string(),
            reason: "name cannot contain path separators or null bytes".to_string(),
        });
    }

    if name == "." || name == ".." {
        return Err(ScaffoldError::InvalidModuleName {
            name: name.to_string(),
            reason: "name cannot be a relative path component".to_string(),
        });
    }

    Ok(())
}
