use super::SeaOrmStorage;
use crate::errors::{CourseError, Result};
use crate::models::memberships::{
    entities::{Membership, MembershipKind},
    requests::CreateMembershipRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

// 三张角色表结构相同，按角色分派到对应实体
macro_rules! membership_table {
    ($kind:expr, |$module:ident| $body:expr) => {
        match $kind {
            MembershipKind::Instruction => {
                use crate::entity::instructions as $module;
                $body
            }
            MembershipKind::TeachingAssisting => {
                use crate::entity::teaching_assistings as $module;
                $body
            }
            MembershipKind::Enrolling => {
                use crate::entity::enrollings as $module;
                $body
            }
        }
    };
}

impl SeaOrmStorage {
    /// 创建学期角色记录
    pub async fn create_membership_impl(&self, req: CreateMembershipRequest) -> Result<Membership> {
        membership_table!(req.kind, |table| {
            let model = table::ActiveModel {
                person_id: Set(req.person_id),
                semester_id: Set(req.semester_id),
                description: Set(req.description),
                ..Default::default()
            };

            let result = model
                .insert(&self.db)
                .await
                .map_err(|e| CourseError::from_db("创建学期角色失败", e))?;

            Ok(result.into_membership())
        })
    }

    /// 人员在该学期是否拥有指定角色
    pub async fn has_membership_impl(
        &self,
        kind: MembershipKind,
        person_id: i64,
        semester_id: i64,
    ) -> Result<bool> {
        let count = membership_table!(kind, |table| {
            table::Entity::find()
                .filter(table::Column::PersonId.eq(person_id))
                .filter(table::Column::SemesterId.eq(semester_id))
                .count(&self.db)
                .await
                .map_err(|e| CourseError::from_db("查询学期角色失败", e))?
        });

        Ok(count > 0)
    }

    /// 列出学期内某角色的全部记录
    pub async fn list_memberships_by_semester_impl(
        &self,
        kind: MembershipKind,
        semester_id: i64,
    ) -> Result<Vec<Membership>> {
        membership_table!(kind, |table| {
            let models = table::Entity::find()
                .filter(table::Column::SemesterId.eq(semester_id))
                .order_by_asc(table::Column::Id)
                .all(&self.db)
                .await
                .map_err(|e| CourseError::from_db("查询学期角色列表失败", e))?;

            Ok(models.into_iter().map(|m| m.into_membership()).collect())
        })
    }
}
