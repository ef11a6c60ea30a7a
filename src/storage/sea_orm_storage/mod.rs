//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courseware;
mod grading;
mod materials;
mod memberships;
mod semesters;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{CourseError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 内存 SQLite 存储，已执行迁移
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
    }

    /// 连接数据库并执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CourseError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + 外键约束）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url == SQLITE_MEMORY_URL;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CourseError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true) // 级联与 RESTRICT 依赖外键约束
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt.journal_mode(SqliteJournalMode::Wal);
        }

        // 内存库在最后一个连接关闭时销毁，保持唯一常驻连接
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| CourseError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CourseError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" || url == SQLITE_MEMORY_URL {
            Ok(SQLITE_MEMORY_URL.to_string())
        } else if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CourseError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn create_person(&self, person: CreatePersonRequest) -> Result<Person> {
        self.create_person_impl(person).await
    }

    async fn get_person_by_user_id(&self, user_id: i64) -> Result<Option<Person>> {
        self.get_person_by_user_id_impl(user_id).await
    }

    async fn delete_person(&self, user_id: i64) -> Result<bool> {
        self.delete_person_impl(user_id).await
    }

    async fn get_identity(&self, user_id: i64) -> Result<Option<Identity>> {
        self.get_identity_impl(user_id).await
    }

    // 学期模块
    async fn create_semester(&self, semester: CreateSemesterRequest) -> Result<Semester> {
        self.create_semester_impl(semester).await
    }

    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>> {
        self.get_semester_by_id_impl(id).await
    }

    async fn list_semesters(&self) -> Result<Vec<Semester>> {
        self.list_semesters_impl().await
    }

    async fn delete_semester(&self, id: i64) -> Result<bool> {
        self.delete_semester_impl(id).await
    }

    // 学期角色模块
    async fn create_membership(&self, membership: CreateMembershipRequest) -> Result<Membership> {
        self.create_membership_impl(membership).await
    }

    async fn has_membership(
        &self,
        kind: MembershipKind,
        person_id: i64,
        semester_id: i64,
    ) -> Result<bool> {
        self.has_membership_impl(kind, person_id, semester_id)
            .await
    }

    async fn list_memberships_by_semester(
        &self,
        kind: MembershipKind,
        semester_id: i64,
    ) -> Result<Vec<Membership>> {
        self.list_memberships_by_semester_impl(kind, semester_id)
            .await
    }

    // 资料模块
    async fn create_file_material(
        &self,
        material: CreateFileMaterialRequest,
    ) -> Result<FileMaterial> {
        self.create_file_material_impl(material).await
    }

    async fn get_file_material_by_id(&self, id: i64) -> Result<Option<FileMaterial>> {
        self.get_file_material_by_id_impl(id).await
    }

    async fn find_file_material_by_name(&self, name: &str) -> Result<Option<FileMaterial>> {
        self.find_file_material_by_name_impl(name).await
    }

    async fn delete_file_material(&self, id: i64) -> Result<bool> {
        self.delete_file_material_impl(id).await
    }

    async fn create_url_material(&self, material: CreateUrlMaterialRequest) -> Result<UrlMaterial> {
        self.create_url_material_impl(material).await
    }

    async fn find_url_material_by_name(&self, name: &str) -> Result<Option<UrlMaterial>> {
        self.find_url_material_by_name_impl(name).await
    }

    async fn delete_url_material(&self, id: i64) -> Result<bool> {
        self.delete_url_material_impl(id).await
    }

    // 课程单元与作业模块
    async fn create_session(&self, session: CreateSessionRequest) -> Result<Session> {
        self.create_session_impl(session).await
    }

    async fn get_session_by_id(&self, id: i64) -> Result<Option<Session>> {
        self.get_session_by_id_impl(id).await
    }

    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 成绩模块
    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission> {
        self.create_submission_impl(submission).await
    }

    async fn get_submission(
        &self,
        person_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_impl(person_id, assignment_id).await
    }

    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question> {
        self.create_question_impl(question).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn create_objection(&self, objection: CreateObjectionRequest) -> Result<Objection> {
        self.create_objection_impl(objection).await
    }

    async fn get_objection_by_id(&self, id: i64) -> Result<Option<Objection>> {
        self.get_objection_by_id_impl(id).await
    }

    async fn respond_objection(
        &self,
        id: i64,
        response: RespondObjectionRequest,
    ) -> Result<Option<Objection>> {
        self.respond_objection_impl(id, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            SQLITE_MEMORY_URL
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("course.db").unwrap(),
            "sqlite://course.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/course").unwrap(),
            "postgres://u:p@localhost/course"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
