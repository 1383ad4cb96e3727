pub mod cli;

use crate::utils::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 使用者提供的專案描述，從 JSON 配置檔解析而來
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    pub version: String,
    pub modules: Vec<ModuleSpec>,
}

/// 單一使用者模組：名稱作為檔名，code 原樣寫入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub name: String,
    pub code: String,
}

impl ProjectConfig {
    /// 從 JSON 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScaffoldError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(ScaffoldError::IoError)?;
        Self::from_json_str(&content)
    }

    /// 從 JSON 字串解析配置
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config = serde_json::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let json_content = r#"
{
  "projectName": "Demo",
  "version": "0.1",
  "modules": [
    { "name": "mathutil", "code": "// math helpers" }
  ]
}
"#;

        let config = ProjectConfig::from_json_str(json_content).unwrap();

        assert_eq!(config.project_name, "Demo");
        assert_eq!(config.version, "0.1");
        assert_eq!(config.modules.len(), 1);
        assert_eq!(config.modules[0].name, "mathutil");
        assert_eq!(config.modules[0].code, "// math helpers");
    }

    #[test]
    fn test_empty_modules_list() {
        let config =
            ProjectConfig::from_json_str(r#"{"projectName":"p","version":"1.0","modules":[]}"#)
                .unwrap();
        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = ProjectConfig::from_json_str(r#"{"projectName":"Demo","version":"#);
        assert!(matches!(result, Err(ScaffoldError::ConfigMalformed(_))));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = ProjectConfig::from_json_str(r#"{"projectName":"Demo","version":"0.1"}"#);
        assert!(matches!(result, Err(ScaffoldError::ConfigMalformed(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{"projectName":"file-test","version":"1.0","modules":[]}"#)
            .unwrap();

        let config = ProjectConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project_name, "file-test");
    }

    #[test]
    fn test_config_not_found_names_the_path() {
        let result = ProjectConfig::from_file("/nonexistent/path.json");
        match result {
            Err(e @ ScaffoldError::ConfigNotFound { .. }) => {
                assert!(e.to_string().contains("/nonexistent/path.json"));
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }
}
