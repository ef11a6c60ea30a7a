use serde::Deserialize;

use super::entities::AccessTier;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileMaterialRequest {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub file: String,
    pub semester_id: i64,
    pub access_control: AccessTier,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUrlMaterialRequest {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}
