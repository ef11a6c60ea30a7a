use serde::Deserialize;

use super::entities::ObjectionState;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmissionRequest {
    pub person_id: i64,
    pub assignment_id: i64,
    pub delay: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub assignment_id: i64,
    pub question_identifier: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub person_id: i64,
    pub question_id: i64,
    pub grade: i32,
}

/// 创建申诉时成绩快照由存储层从 Grade 读取
#[derive(Debug, Clone, Deserialize)]
pub struct CreateObjectionRequest {
    pub grade_id: i64,
    pub objection_text: String,
}

// 处理申诉：只能改为 Accepted 或 Rejected
#[derive(Debug, Clone, Deserialize)]
pub struct RespondObjectionRequest {
    pub state: ObjectionState,
    #[serde(default)]
    pub response_text: String,
}
