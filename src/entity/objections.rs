//! 成绩申诉实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "objections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub state: i32,
    pub grade_id: i64,
    pub current_grade: i32,
    #[sea_orm(column_type = "Text")]
    pub objection_text: String,
    #[sea_orm(column_type = "Text")]
    pub response_text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grades::Entity",
        from = "Column::GradeId",
        to = "super::grades::Column::Id"
    )]
    Grade,
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_objection(self) -> crate::models::grading::entities::Objection {
        use crate::models::grading::entities::{Objection, ObjectionState};

        Objection {
            id: self.id,
            state: ObjectionState::from_code(self.state).unwrap_or_default(),
            grade_id: self.grade_id,
            current_grade: self.current_grade,
            objection_text: self.objection_text,
            response_text: self.response_text,
        }
    }
}
