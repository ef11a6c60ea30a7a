//! 学期实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "semesters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub year: i32,
    pub term: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub syllabus: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::file_materials::Entity")]
    FileMaterials,
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::file_materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FileMaterials.def()
    }
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_semester(self) -> crate::models::semesters::entities::Semester {
        use crate::models::semesters::entities::{Semester, Term};

        Semester {
            id: self.id,
            year: self.year,
            term: Term::from_code(self.term).unwrap_or(Term::Fall),
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            syllabus: self.syllabus,
        }
    }
}
