//! 课程单元与作业，以及它们与资料之间的关联表

use super::SeaOrmStorage;
use crate::entity::{
    assignment_files, assignment_urls, assignments, session_files, session_urls, sessions,
};
use crate::errors::{CourseError, Result};
use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    sessions::{entities::Session, requests::CreateSessionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课程单元及其资料关联
    pub async fn create_session_impl(&self, req: CreateSessionRequest) -> Result<Session> {
        if req.title.trim().is_empty() {
            return Err(CourseError::validation("Session title must not be empty"));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseError::from_db("开启事务失败", e))?;

        let session = sessions::ActiveModel {
            semester_id: Set(req.semester_id),
            title: Set(req.title),
            subtitle: Set(req.subtitle),
            description: Set(req.description),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CourseError::from_db("创建课程单元失败", e))?;

        for file_id in &req.file_ids {
            session_files::ActiveModel {
                session_id: Set(session.id),
                file_material_id: Set(*file_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| CourseError::from_db("关联课程单元文件资料失败", e))?;
        }

        for url_id in &req.url_ids {
            session_urls::ActiveModel {
                session_id: Set(session.id),
                url_material_id: Set(*url_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| CourseError::from_db("关联课程单元链接资料失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| CourseError::from_db("提交事务失败", e))?;

        let (file_ids, url_ids) = self.session_links(session.id).await?;
        Ok(session.into_session(file_ids, url_ids))
    }

    /// 通过 ID 获取课程单元
    pub async fn get_session_by_id_impl(&self, id: i64) -> Result<Option<Session>> {
        let Some(session) = sessions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询课程单元失败", e))?
        else {
            return Ok(None);
        };

        let (file_ids, url_ids) = self.session_links(session.id).await?;
        Ok(Some(session.into_session(file_ids, url_ids)))
    }

    /// 创建作业及其资料关联
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        if req.title.trim().is_empty() {
            return Err(CourseError::validation("Assignment title must not be empty"));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseError::from_db("开启事务失败", e))?;

        let assignment = assignments::ActiveModel {
            semester_id: Set(req.semester_id),
            title: Set(req.title),
            subtitle: Set(req.subtitle),
            description: Set(req.description),
            questions_id: Set(req.questions_id),
            solutions_id: Set(req.solutions_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CourseError::from_db("创建作业失败", e))?;

        for file_id in &req.file_ids {
            assignment_files::ActiveModel {
                assignment_id: Set(assignment.id),
                file_material_id: Set(*file_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| CourseError::from_db("关联作业文件资料失败", e))?;
        }

        for url_id in &req.url_ids {
            assignment_urls::ActiveModel {
                assignment_id: Set(assignment.id),
                url_material_id: Set(*url_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| CourseError::from_db("关联作业链接资料失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| CourseError::from_db("提交事务失败", e))?;

        let (file_ids, url_ids) = self.assignment_links(assignment.id).await?;
        Ok(assignment.into_assignment(file_ids, url_ids))
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let Some(assignment) = assignments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询作业失败", e))?
        else {
            return Ok(None);
        };

        let (file_ids, url_ids) = self.assignment_links(assignment.id).await?;
        Ok(Some(assignment.into_assignment(file_ids, url_ids)))
    }

    /// 删除作业，题目、成绩、申诉、提交与关联记录随之级联删除
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = assignments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseError::from_db("删除作业失败", e))?;

        Ok(result.rows_affected > 0)
    }

    async fn session_links(&self, session_id: i64) -> Result<(Vec<i64>, Vec<i64>)> {
        let file_ids: Vec<i64> = session_files::Entity::find()
            .select_only()
            .column(session_files::Column::FileMaterialId)
            .filter(session_files::Column::SessionId.eq(session_id))
            .order_by_asc(session_files::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询课程单元资料失败", e))?;

        let url_ids: Vec<i64> = session_urls::Entity::find()
            .select_only()
            .column(session_urls::Column::UrlMaterialId)
            .filter(session_urls::Column::SessionId.eq(session_id))
            .order_by_asc(session_urls::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询课程单元资料失败", e))?;

        Ok((file_ids, url_ids))
    }

    async fn assignment_links(&self, assignment_id: i64) -> Result<(Vec<i64>, Vec<i64>)> {
        let file_ids: Vec<i64> = assignment_files::Entity::find()
            .select_only()
            .column(assignment_files::Column::FileMaterialId)
            .filter(assignment_files::Column::AssignmentId.eq(assignment_id))
            .order_by_asc(assignment_files::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询作业资料失败", e))?;

        let url_ids: Vec<i64> = assignment_urls::Entity::find()
            .select_only()
            .column(assignment_urls::Column::UrlMaterialId)
            .filter(assignment_urls::Column::AssignmentId.eq(assignment_id))
            .order_by_asc(assignment_urls::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询作业资料失败", e))?;

        Ok((file_ids, url_ids))
    }
}
