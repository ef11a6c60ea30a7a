//! 人员档案实体，主键即用户 ID

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub employee_id: i64,
    pub academic_email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_person(self) -> crate::models::persons::entities::Person {
        use crate::models::persons::entities::Person;

        Person {
            user_id: self.user_id,
            employee_id: self.employee_id,
            academic_email: self.academic_email,
            github_url: self.github_url,
            linkedin_url: self.linkedin_url,
            image: self.image,
        }
    }
}
