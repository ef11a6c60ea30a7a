use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::semesters::{ActiveModel, Column, Entity as Semesters};
use crate::errors::{CourseError, Result};
use crate::models::semesters::{entities::Semester, requests::CreateSemesterRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 创建学期
    pub async fn create_semester_impl(&self, req: CreateSemesterRequest) -> Result<Semester> {
        if req.title.trim().is_empty() {
            return Err(CourseError::validation("Semester title must not be empty"));
        }

        let model = ActiveModel {
            year: Set(req.year),
            term: Set(req.term.code()),
            title: Set(req.title),
            subtitle: Set(req.subtitle),
            description: Set(req.description),
            syllabus: Set(req.syllabus),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建学期失败", e))?;

        Ok(result.into_semester())
    }

    /// 通过 ID 获取学期
    pub async fn get_semester_by_id_impl(&self, id: i64) -> Result<Option<Semester>> {
        let result = Semesters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询学期失败", e))?;

        Ok(result.map(|m| m.into_semester()))
    }

    /// 列出全部学期：年份倒序，同年按秋、春、夏排列
    pub async fn list_semesters_impl(&self) -> Result<Vec<Semester>> {
        let semesters = Semesters::find()
            .order_by_desc(Column::Year)
            .order_by_asc(Column::Term)
            .all(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询学期列表失败", e))?;

        Ok(semesters.into_iter().map(|m| m.into_semester()).collect())
    }

    /// 删除学期
    ///
    /// 先删除本学期的作业，再删除学期本身；其余下属记录由外键级联删除。
    /// 本学期的文件资料若仍被其他学期的作业引用，整个事务回滚。
    pub async fn delete_semester_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseError::from_db("开启事务失败", e))?;

        let removed = Assignments::delete_many()
            .filter(AssignmentColumn::SemesterId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| CourseError::from_db("删除学期作业失败", e))?;
        debug!(
            "Removed {} assignments of semester {}",
            removed.rows_affected, id
        );

        let result = Semesters::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| CourseError::from_db("删除学期失败", e))?;

        txn.commit()
            .await
            .map_err(|e| CourseError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
