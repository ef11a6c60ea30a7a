use serde::{Deserialize, Serialize};

// 人员档案，与用户一对一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub user_id: i64,
    pub employee_id: i64,
    pub academic_email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub image: Option<String>,
}
