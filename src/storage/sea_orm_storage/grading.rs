use super::SeaOrmStorage;
use crate::entity::{grades, objections, questions, submissions};
use crate::errors::{CourseError, Result};
use crate::models::grading::{
    entities::{Grade, Objection, ObjectionState, Question, Submission},
    requests::{
        CreateGradeRequest, CreateObjectionRequest, CreateQuestionRequest,
        CreateSubmissionRequest, RespondObjectionRequest,
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建作业提交
    pub async fn create_submission_impl(&self, req: CreateSubmissionRequest) -> Result<Submission> {
        if req.delay < 0 {
            return Err(CourseError::validation("Submission delay must not be negative"));
        }

        let model = submissions::ActiveModel {
            person_id: Set(req.person_id),
            assignment_id: Set(req.assignment_id),
            delay: Set(req.delay),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建作业提交失败", e))?;

        Ok(result.into_submission())
    }

    /// 获取人员在某作业下的提交
    pub async fn get_submission_impl(
        &self,
        person_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Submission>> {
        let result = submissions::Entity::find()
            .filter(submissions::Column::PersonId.eq(person_id))
            .filter(submissions::Column::AssignmentId.eq(assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询作业提交失败", e))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 创建题目
    pub async fn create_question_impl(&self, req: CreateQuestionRequest) -> Result<Question> {
        if req.question_identifier.trim().is_empty() {
            return Err(CourseError::validation(
                "Question identifier must not be empty",
            ));
        }

        let model = questions::ActiveModel {
            assignment_id: Set(req.assignment_id),
            question_identifier: Set(req.question_identifier),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建题目失败", e))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = questions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询题目失败", e))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 创建成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = grades::ActiveModel {
            person_id: Set(req.person_id),
            question_id: Set(req.question_id),
            grade: Set(req.grade),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建成绩失败", e))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = grades::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询成绩失败", e))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 创建申诉，记录当前成绩快照
    pub async fn create_objection_impl(&self, req: CreateObjectionRequest) -> Result<Objection> {
        if req.objection_text.trim().is_empty() {
            return Err(CourseError::validation("Objection text must not be empty"));
        }

        let grade = grades::Entity::find_by_id(req.grade_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询成绩失败", e))?
            .ok_or_else(|| CourseError::not_found(format!("Grade {} not found", req.grade_id)))?;

        let model = objections::ActiveModel {
            state: Set(ObjectionState::Created.code()),
            grade_id: Set(grade.id),
            current_grade: Set(grade.grade),
            objection_text: Set(req.objection_text),
            response_text: Set(String::new()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseError::from_db("创建申诉失败", e))?;

        Ok(result.into_objection())
    }

    /// 通过 ID 获取申诉
    pub async fn get_objection_by_id_impl(&self, id: i64) -> Result<Option<Objection>> {
        let result = objections::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CourseError::from_db("查询申诉失败", e))?;

        Ok(result.map(|m| m.into_objection()))
    }

    /// 处理申诉
    ///
    /// 只能把待处理的申诉改为接受或驳回，已处理的申诉不可再变更。
    pub async fn respond_objection_impl(
        &self,
        id: i64,
        req: RespondObjectionRequest,
    ) -> Result<Option<Objection>> {
        if !req.state.is_resolved() {
            return Err(CourseError::validation(
                "Objection can only be accepted or rejected",
            ));
        }

        // 只更新仍处于待处理状态的申诉，并发处理时只有一方成功
        let result = objections::Entity::update_many()
            .col_expr(objections::Column::State, Expr::value(req.state.code()))
            .col_expr(
                objections::Column::ResponseText,
                Expr::value(req.response_text),
            )
            .filter(objections::Column::Id.eq(id))
            .filter(objections::Column::State.eq(ObjectionState::Created.code()))
            .exec(&self.db)
            .await
            .map_err(|e| CourseError::from_db("更新申诉失败", e))?;

        let Some(updated) = self.get_objection_by_id_impl(id).await? else {
            return Ok(None);
        };

        if result.rows_affected == 0 {
            return Err(CourseError::validation(format!(
                "Objection {id} is already {}",
                updated.state
            )));
        }

        Ok(Some(updated))
    }
}
