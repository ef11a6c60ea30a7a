use serde::Deserialize;

use super::entities::Term;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSemesterRequest {
    pub year: i32,
    pub term: Term,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub syllabus: Option<String>,
}
