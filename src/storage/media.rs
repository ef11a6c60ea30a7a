//! 资料文件存储
//!
//! 数据库中只记录相对路径，实际内容位于配置的资料根目录下。

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{CourseError, Result};

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config() -> Self {
        Self::new(&AppConfig::get().media.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 把存储路径解析到根目录下，拒绝绝对路径和 `..`
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let relative = Path::new(relative);
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(CourseError::not_found(format!(
                        "Stored path escapes media root: {}",
                        relative.display()
                    )));
                }
            }
        }

        if resolved == self.root {
            return Err(CourseError::not_found("Stored path is empty"));
        }

        Ok(resolved)
    }

    /// 读取存储文件的全部内容
    pub async fn read(&self, relative: &str) -> Result<Vec<u8>> {
        let path = self.resolve(relative)?;
        debug!("Reading media file {}", path.display());
        let bytes = tokio::fs::read(&path).await?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stays_under_root() {
        let store = MediaStore::new("/srv/media");
        assert_eq!(
            store.resolve("files/hw1.pdf").unwrap(),
            PathBuf::from("/srv/media/files/hw1.pdf")
        );
        assert_eq!(
            store.resolve("./files/hw1.pdf").unwrap(),
            PathBuf::from("/srv/media/files/hw1.pdf")
        );
    }

    #[test]
    fn test_resolve_rejects_escape() {
        let store = MediaStore::new("/srv/media");
        assert!(store.resolve("../etc/passwd").is_err());
        assert!(store.resolve("files/../../secret").is_err());
        assert!(store.resolve("/etc/passwd").is_err());
        assert!(store.resolve("").is_err());
    }

    #[actix_web::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(dir.path());
        let err = store.read("files/nope.pdf").await.unwrap_err();
        assert!(matches!(err, CourseError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::create_dir_all(dir.path().join("files")).await.unwrap();
        tokio::fs::write(dir.path().join("files/a.txt"), b"hello").await.unwrap();

        let store = MediaStore::new(dir.path());
        assert_eq!(store.read("files/a.txt").await.unwrap(), b"hello");
    }
}
