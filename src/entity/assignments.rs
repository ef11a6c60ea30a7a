//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub semester_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub questions_id: i64,
    pub solutions_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::semesters::Entity",
        from = "Column::SemesterId",
        to = "super::semesters::Column::Id"
    )]
    Semester,
    #[sea_orm(
        belongs_to = "super::file_materials::Entity",
        from = "Column::QuestionsId",
        to = "super::file_materials::Column::Id",
        on_delete = "Restrict"
    )]
    Questions,
    #[sea_orm(
        belongs_to = "super::file_materials::Entity",
        from = "Column::SolutionsId",
        to = "super::file_materials::Column::Id",
        on_delete = "Restrict"
    )]
    Solutions,
    #[sea_orm(has_many = "super::assignment_files::Entity")]
    Files,
    #[sea_orm(has_many = "super::assignment_urls::Entity")]
    Urls,
}

impl Related<super::semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::assignment_files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Files.def()
    }
}

impl Related<super::assignment_urls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Urls.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型，关联资料 ID 由存储层另行查询
impl Model {
    pub fn into_assignment(
        self,
        file_ids: Vec<i64>,
        url_ids: Vec<i64>,
    ) -> crate::models::assignments::entities::Assignment {
        use crate::models::assignments::entities::Assignment;

        Assignment {
            id: self.id,
            semester_id: self.semester_id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            questions_id: self.questions_id,
            solutions_id: self.solutions_id,
            file_ids,
            url_ids,
        }
    }
}
