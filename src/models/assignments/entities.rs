use serde::{Deserialize, Serialize};

/// 作业
///
/// `questions_id` / `solutions_id` 指向的文件资料在作业存在期间不可删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub semester_id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub questions_id: i64,
    pub solutions_id: i64,
    pub file_ids: Vec<i64>,
    pub url_ids: Vec<i64>,
}
