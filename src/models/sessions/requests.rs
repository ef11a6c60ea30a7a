use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub semester_id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub file_ids: Vec<i64>,
    #[serde(default)]
    pub url_ids: Vec<i64>,
}
