//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_course_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CourseError {
            $($variant(String),)*
        }

        impl CourseError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CourseError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CourseError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CourseError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CourseError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CourseError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_course_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    Conflict("E008", "Unique Constraint Violation"),
    Constraint("E009", "Foreign Key Constraint Violation"),
}

impl CourseError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 按约束类型对数据库错误分类，并附带操作上下文
    ///
    /// 唯一约束冲突 -> `Conflict`，外键约束（含 RESTRICT 删除保护）-> `Constraint`，
    /// 其余 -> `DatabaseOperation`。
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                CourseError::conflict(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                CourseError::constraint(format!("{context}: {detail}"))
            }
            _ => CourseError::database_operation(format!("{context}: {err}")),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, CourseError::Conflict(_))
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, CourseError::Constraint(_))
    }
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CourseError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for CourseError {
    fn from(err: DbErr) -> Self {
        CourseError::from_db("数据库操作失败", err)
    }
}

impl From<std::io::Error> for CourseError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            CourseError::NotFound(err.to_string())
        } else {
            CourseError::FileOperation(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CourseError {
    fn from(err: serde_json::Error) -> Self {
        CourseError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CourseError::database_config("test").code(), "E001");
        assert_eq!(CourseError::validation("test").code(), "E005");
        assert_eq!(CourseError::conflict("test").code(), "E008");
        assert_eq!(CourseError::constraint("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CourseError::constraint("test").error_type(),
            "Foreign Key Constraint Violation"
        );
        assert_eq!(
            CourseError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = CourseError::not_found("material hw1");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("material hw1"));
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(CourseError::from(io), CourseError::NotFound(_)));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(CourseError::from(io), CourseError::FileOperation(_)));
    }

    #[test]
    fn test_plain_db_error_is_operation_error() {
        let err = CourseError::from_db("查询失败", DbErr::Custom("boom".into()));
        assert!(matches!(err, CourseError::DatabaseOperation(_)));
        assert!(!err.is_conflict());
        assert!(!err.is_constraint());
    }
}
