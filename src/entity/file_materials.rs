//! 文件资料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "file_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub file: String,
    pub semester_id: i64,
    pub access_control: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::semesters::Entity",
        from = "Column::SemesterId",
        to = "super::semesters::Column::Id"
    )]
    Semester,
}

impl Related<super::semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_file_material(self) -> crate::models::materials::entities::FileMaterial {
        use crate::models::materials::entities::{AccessTier, FileMaterial};

        FileMaterial {
            id: self.id,
            name: self.name,
            title: self.title,
            description: self.description,
            file: self.file,
            semester_id: self.semester_id,
            // 未知层级按最严格处理
            access_control: AccessTier::from_level(self.access_control)
                .unwrap_or(AccessTier::Admin),
        }
    }
}
