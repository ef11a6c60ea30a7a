use serde::{Deserialize, Serialize};
use std::path::Path;

/// 文件下载路由前缀
pub const FILE_DOWNLOAD_PREFIX: &str = "/api/course/file/";

/// 访问层级：Public < Student < TA < Admin
///
/// 既表示文件资料要求的最低层级，也表示请求方在某学期中拥有的层级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    Public = 0,
    Student = 1,
    Ta = 2,
    Admin = 3,
}

impl AccessTier {
    pub fn level(self) -> i32 {
        self as i32
    }

    pub fn from_level(level: i32) -> Option<Self> {
        match level {
            0 => Some(AccessTier::Public),
            1 => Some(AccessTier::Student),
            2 => Some(AccessTier::Ta),
            3 => Some(AccessTier::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessTier::Public => write!(f, "Public"),
            AccessTier::Student => write!(f, "Student"),
            AccessTier::Ta => write!(f, "TA"),
            AccessTier::Admin => write!(f, "Admin"),
        }
    }
}

// 文件资料，name 全局唯一，对外通过下载地址访问
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMaterial {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub file: String, // 相对于资料根目录的存储路径
    pub semester_id: i64,
    pub access_control: AccessTier,
}

impl FileMaterial {
    /// 存储文件的扩展名（带点），没有扩展名时为空
    pub fn extension(&self) -> String {
        Path::new(&self.file)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default()
    }

    /// 下载时使用的文件名：资料名 + 原始扩展名
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, self.extension())
    }

    pub fn url(&self) -> String {
        format!("{FILE_DOWNLOAD_PREFIX}{}", self.file_name())
    }
}

impl std::fmt::Display for FileMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "File {}", self.name)
    }
}

// 外部链接资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMaterial {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl UrlMaterial {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for UrlMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "URL {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(name: &str, file: &str) -> FileMaterial {
        FileMaterial {
            id: 1,
            name: name.to_string(),
            title: "Homework 1".to_string(),
            description: String::new(),
            file: file.to_string(),
            semester_id: 1,
            access_control: AccessTier::Student,
        }
    }

    #[test]
    fn test_file_name_keeps_original_extension() {
        let m = material("hw1-solutions", "files/upload_8f3a.pdf");
        assert_eq!(m.extension(), ".pdf");
        assert_eq!(m.file_name(), "hw1-solutions.pdf");
        assert_eq!(m.url(), "/api/course/file/hw1-solutions.pdf");
    }

    #[test]
    fn test_file_name_uses_last_extension_only() {
        let m = material("dataset", "files/data.tar.gz");
        assert_eq!(m.file_name(), "dataset.gz");
    }

    #[test]
    fn test_file_name_without_extension() {
        assert_eq!(material("notes", "files/README").file_name(), "notes");
        assert_eq!(material("rc", "files/.bashrc").file_name(), "rc");
    }

    #[test]
    fn test_url_is_deterministic() {
        let a = material("syllabus1", "files/a.pdf");
        let mut b = a.clone();
        b.title = "Different title".to_string();
        b.access_control = AccessTier::Admin;
        assert_eq!(a.url(), b.url());
    }

    #[test]
    fn test_access_tier_order_and_levels() {
        assert!(AccessTier::Public < AccessTier::Student);
        assert!(AccessTier::Student < AccessTier::Ta);
        assert!(AccessTier::Ta < AccessTier::Admin);
        for level in 0..=3 {
            let tier = AccessTier::from_level(level).expect("valid level");
            assert_eq!(tier.level(), level);
        }
        assert_eq!(AccessTier::from_level(4), None);
        assert_eq!(AccessTier::Ta.to_string(), "TA");
    }
}
