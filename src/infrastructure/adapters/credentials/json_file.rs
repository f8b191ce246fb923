//! JSON File Credential Source - 从 teachers.json 读取教师凭据
//!
//! 实现 CredentialSourcePort trait
//!
//! 文件格式:
//! ```json
//! { "teachers": [ { "username": "mchen", "password": "chess456" } ] }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{CredentialError, CredentialSourcePort, TeacherCredential};

#[derive(Debug, Deserialize)]
struct TeachersFile {
    teachers: Vec<TeacherCredential>,
}

/// JSON 文件凭据来源
///
/// 不缓存，每次 `load` 都重新读取文件，修改文件后无需重启即可生效
pub struct JsonFileCredentialSource {
    path: PathBuf,
}

impl JsonFileCredentialSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 凭据文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialSourcePort for JsonFileCredentialSource {
    async fn load(&self) -> Result<Vec<TeacherCredential>, CredentialError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CredentialError::Io(format!("{}: {}", self.path.display(), e)))?;

        let file: TeachersFile = serde_json::from_str(&content)
            .map_err(|e| CredentialError::Parse(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            count = file.teachers.len(),
            "Teacher credentials loaded"
        );

        Ok(file.teachers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_teachers() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("teachers.json");
        std::fs::write(
            &path,
            r#"{"teachers": [
                {"username": "mrodriguez", "password": "art123"},
                {"username": "mchen", "password": "chess456"}
            ]}"#,
        )
        .unwrap();

        let source = JsonFileCredentialSource::new(&path);
        let teachers = source.load().await.unwrap();

        assert_eq!(teachers.len(), 2);
        assert_eq!(teachers[1], TeacherCredential::new("mchen", "chess456"));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("teachers.json");
        std::fs::write(&path, r#"{"teachers": []}"#).unwrap();

        let source = JsonFileCredentialSource::new(&path);
        assert!(source.load().await.unwrap().is_empty());

        std::fs::write(
            &path,
            r#"{"teachers": [{"username": "new", "password": "pw"}]}"#,
        )
        .unwrap();
        assert_eq!(source.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let source = JsonFileCredentialSource::new(temp_dir.path().join("absent.json"));
        assert!(matches!(source.load().await, Err(CredentialError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("teachers.json");
        std::fs::write(&path, r#"{"users": []}"#).unwrap();

        let source = JsonFileCredentialSource::new(&path);
        assert!(matches!(source.load().await, Err(CredentialError::Parse(_))));
    }
}
