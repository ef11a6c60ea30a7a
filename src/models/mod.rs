//! 业务数据模型
//!
//! 与 `entity` 中的数据库实体分离，Storage 层负责两者之间的转换。

pub mod assignments;
pub mod common;
pub mod grading;
pub mod materials;
pub mod memberships;
pub mod persons;
pub mod semesters;
pub mod sessions;
pub mod users;

pub use common::response::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 响应中的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    Unauthorized = 1001,

    InternalServerError = 5000,
    DatabaseError = 5001,
    FileReadError = 5002,
}
