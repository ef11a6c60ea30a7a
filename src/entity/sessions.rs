//! 课程单元实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub semester_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::semesters::Entity",
        from = "Column::SemesterId",
        to = "super::semesters::Column::Id"
    )]
    Semester,
    #[sea_orm(has_many = "super::session_files::Entity")]
    Files,
    #[sea_orm(has_many = "super::session_urls::Entity")]
    Urls,
}

impl Related<super::semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::session_files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Files.def()
    }
}

impl Related<super::session_urls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Urls.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型，关联资料 ID 由存储层另行查询
impl Model {
    pub fn into_session(
        self,
        file_ids: Vec<i64>,
        url_ids: Vec<i64>,
    ) -> crate::models::sessions::entities::Session {
        use crate::models::sessions::entities::Session;

        Session {
            id: self.id,
            semester_id: self.semester_id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            file_ids,
            url_ids,
        }
    }
}
