use serde::Deserialize;

use super::entities::MembershipKind;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMembershipRequest {
    pub kind: MembershipKind,
    pub person_id: i64,
    pub semester_id: i64,
    #[serde(default)]
    pub description: String,
}
