use serde::{Deserialize, Serialize};

/// 人员在某学期中的角色
///
/// 三种角色分别对应 `instructions`、`teaching_assistings`、`enrollings` 三张表，
/// 每张表内 (person, semester) 唯一。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipKind {
    Instruction,       // 授课
    TeachingAssisting, // 助教
    Enrolling,         // 选课
}

impl MembershipKind {
    pub fn all() -> [MembershipKind; 3] {
        [
            MembershipKind::Instruction,
            MembershipKind::TeachingAssisting,
            MembershipKind::Enrolling,
        ]
    }
}

impl std::fmt::Display for MembershipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipKind::Instruction => write!(f, "instruction"),
            MembershipKind::TeachingAssisting => write!(f, "teaching_assisting"),
            MembershipKind::Enrolling => write!(f, "enrolling"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: i64,
    pub kind: MembershipKind,
    pub person_id: i64,
    pub semester_id: i64,
    pub description: String,
}
