use serde::{Deserialize, Serialize};

// 课程单元，关联若干文件资料与链接资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub semester_id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub file_ids: Vec<i64>,
    pub url_ids: Vec<i64>,
}
