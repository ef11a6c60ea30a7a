use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonRequest {
    pub user_id: i64,
    pub employee_id: i64,
    pub academic_email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub image: Option<String>,
}
