use serde::{Deserialize, Serialize};

// 作业提交，(person, assignment) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub person_id: i64,
    pub assignment_id: i64,
    pub delay: i32,
}

// 作业中的题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub assignment_id: i64,
    pub question_identifier: String,
}

// 成绩，(person, question) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub person_id: i64,
    pub question_id: i64,
    pub grade: i32,
}

// 申诉状态，数据库中以整数存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectionState {
    #[default]
    Created, // 0
    Accepted, // 1
    Rejected, // 2
}

impl ObjectionState {
    pub fn code(self) -> i32 {
        match self {
            ObjectionState::Created => 0,
            ObjectionState::Accepted => 1,
            ObjectionState::Rejected => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ObjectionState::Created),
            1 => Some(ObjectionState::Accepted),
            2 => Some(ObjectionState::Rejected),
            _ => None,
        }
    }

    /// 已处理（接受或驳回）的申诉不再变更
    pub fn is_resolved(self) -> bool {
        !matches!(self, ObjectionState::Created)
    }
}

impl std::fmt::Display for ObjectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectionState::Created => write!(f, "Created"),
            ObjectionState::Accepted => write!(f, "Accepted"),
            ObjectionState::Rejected => write!(f, "Rejected"),
        }
    }
}

/// 成绩申诉
///
/// `current_grade` 是提出申诉时成绩的快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objection {
    pub id: i64,
    pub state: ObjectionState,
    pub grade_id: i64,
    pub current_grade: i32,
    pub objection_text: String,
    pub response_text: String,
}
