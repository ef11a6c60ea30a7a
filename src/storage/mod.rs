use std::sync::Arc;

use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    grading::{
        entities::{Grade, Objection, Question, Submission},
        requests::{
            CreateGradeRequest, CreateObjectionRequest, CreateQuestionRequest,
            CreateSubmissionRequest, RespondObjectionRequest,
        },
    },
    materials::{
        entities::{FileMaterial, UrlMaterial},
        requests::{CreateFileMaterialRequest, CreateUrlMaterialRequest},
    },
    memberships::{
        entities::{Membership, MembershipKind},
        requests::CreateMembershipRequest,
    },
    persons::{entities::Person, requests::CreatePersonRequest},
    semesters::{entities::Semester, requests::CreateSemesterRequest},
    sessions::{entities::Session, requests::CreateSessionRequest},
    users::{
        entities::{Identity, User},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod media;
pub mod sea_orm_storage;

pub use media::MediaStore;

/// 课程数据存储接口
///
/// 写操作由外部管理端完成，本服务自身只读；唯一约束冲突返回 `Conflict`，
/// 外键约束（含 RESTRICT 删除保护）返回 `Constraint`。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户与人员档案
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 删除用户（级联删除人员档案及其全部记录）
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 创建人员档案
    async fn create_person(&self, person: CreatePersonRequest) -> Result<Person>;
    // 通过用户ID获取人员档案
    async fn get_person_by_user_id(&self, user_id: i64) -> Result<Option<Person>>;
    // 删除人员档案
    async fn delete_person(&self, user_id: i64) -> Result<bool>;
    // 获取用户及其人员档案
    async fn get_identity(&self, user_id: i64) -> Result<Option<Identity>>;

    /// 学期管理方法
    async fn create_semester(&self, semester: CreateSemesterRequest) -> Result<Semester>;
    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>>;
    // 按年份倒序、学期正序列出
    async fn list_semesters(&self) -> Result<Vec<Semester>>;
    // 删除学期及其下属记录
    async fn delete_semester(&self, id: i64) -> Result<bool>;

    /// 学期角色方法（授课 / 助教 / 选课）
    async fn create_membership(&self, membership: CreateMembershipRequest) -> Result<Membership>;
    // 人员在该学期是否有指定角色
    async fn has_membership(
        &self,
        kind: MembershipKind,
        person_id: i64,
        semester_id: i64,
    ) -> Result<bool>;
    async fn list_memberships_by_semester(
        &self,
        kind: MembershipKind,
        semester_id: i64,
    ) -> Result<Vec<Membership>>;

    /// 资料管理方法
    async fn create_file_material(&self, material: CreateFileMaterialRequest)
    -> Result<FileMaterial>;
    async fn get_file_material_by_id(&self, id: i64) -> Result<Option<FileMaterial>>;
    // 通过唯一名称获取文件资料
    async fn find_file_material_by_name(&self, name: &str) -> Result<Option<FileMaterial>>;
    // 删除文件资料，被作业题目/答案引用时失败
    async fn delete_file_material(&self, id: i64) -> Result<bool>;
    async fn create_url_material(&self, material: CreateUrlMaterialRequest) -> Result<UrlMaterial>;
    async fn find_url_material_by_name(&self, name: &str) -> Result<Option<UrlMaterial>>;
    async fn delete_url_material(&self, id: i64) -> Result<bool>;

    /// 课程单元与作业
    async fn create_session(&self, session: CreateSessionRequest) -> Result<Session>;
    async fn get_session_by_id(&self, id: i64) -> Result<Option<Session>>;
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 提交、成绩与申诉
    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission>;
    async fn get_submission(&self, person_id: i64, assignment_id: i64)
    -> Result<Option<Submission>>;
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 创建申诉，成绩快照取自当前成绩
    async fn create_objection(&self, objection: CreateObjectionRequest) -> Result<Objection>;
    async fn get_objection_by_id(&self, id: i64) -> Result<Option<Objection>>;
    // 处理申诉（接受或驳回）
    async fn respond_objection(
        &self,
        id: i64,
        response: RespondObjectionRequest,
    ) -> Result<Option<Objection>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
