//! 集成测试共用的夹具：内存 SQLite 存储、临时资料目录与令牌签发

#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use rust_course_backend::cache::{MokaCacheWrapper, ObjectCache};
use rust_course_backend::models::materials::entities::{AccessTier, FileMaterial};
use rust_course_backend::models::materials::requests::CreateFileMaterialRequest;
use rust_course_backend::models::memberships::entities::MembershipKind;
use rust_course_backend::models::memberships::requests::CreateMembershipRequest;
use rust_course_backend::models::persons::requests::CreatePersonRequest;
use rust_course_backend::models::semesters::entities::{Semester, Term};
use rust_course_backend::models::semesters::requests::CreateSemesterRequest;
use rust_course_backend::models::users::entities::User;
use rust_course_backend::models::users::requests::CreateUserRequest;
use rust_course_backend::storage::sea_orm_storage::SeaOrmStorage;
use rust_course_backend::storage::{MediaStore, Storage};
use rust_course_backend::utils::JwtUtils;

pub const SYLLABUS_BYTES: &[u8] = b"%PDF-1.4 syllabus";
pub const SOLUTIONS_BYTES: &[u8] = b"%PDF-1.4 solutions";
pub const TA_NOTES_BYTES: &[u8] = b"grading rubric";
pub const EXAM_KEY_BYTES: &[u8] = b"exam answers";

/// 构建挂载课程路由的测试服务
macro_rules! init_app {
    ($fx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($fx.storage.clone()))
                .app_data(actix_web::web::Data::new($fx.cache.clone()))
                .app_data(actix_web::web::Data::new($fx.media.clone()))
                .configure(rust_course_backend::routes::configure_course_routes),
        )
        .await
    };
}

pub async fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(
        SeaOrmStorage::in_memory()
            .await
            .expect("in-memory storage should start"),
    )
}

pub async fn create_semester(storage: &dyn Storage, year: i32, term: Term) -> Semester {
    storage
        .create_semester(CreateSemesterRequest {
            year,
            term,
            title: format!("Systems Programming {year}"),
            subtitle: String::new(),
            description: String::new(),
            syllabus: None,
        })
        .await
        .expect("create semester")
}

pub async fn create_user(storage: &dyn Storage, username: &str, superuser: bool) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_superuser: superuser,
        })
        .await
        .expect("create user")
}

/// 创建带人员档案的用户
pub async fn create_person(storage: &dyn Storage, username: &str, employee_id: i64) -> User {
    let user = create_user(storage, username, false).await;
    storage
        .create_person(CreatePersonRequest {
            user_id: user.id,
            employee_id,
            academic_email: format!("{username}@uni.edu"),
            github_url: None,
            linkedin_url: None,
            image: None,
        })
        .await
        .expect("create person");
    user
}

pub async fn add_membership(
    storage: &dyn Storage,
    kind: MembershipKind,
    person_id: i64,
    semester_id: i64,
) {
    storage
        .create_membership(CreateMembershipRequest {
            kind,
            person_id,
            semester_id,
            description: String::new(),
        })
        .await
        .expect("create membership");
}

pub async fn create_material(
    storage: &dyn Storage,
    name: &str,
    file: &str,
    semester_id: i64,
    access_control: AccessTier,
) -> FileMaterial {
    storage
        .create_file_material(CreateFileMaterialRequest {
            name: name.to_string(),
            title: name.to_string(),
            description: String::new(),
            file: file.to_string(),
            semester_id,
            access_control,
        })
        .await
        .expect("create file material")
}

pub fn bearer(user_id: i64) -> (&'static str, String) {
    let token = JwtUtils::issue_access_token(user_id).expect("issue token");
    ("Authorization", format!("Bearer {token}"))
}

/// 下载场景夹具
///
/// 一个学期（Fall 2024）下的四份资料分别要求 Public / Student / TA / Admin，
/// 另有一份资料的存储文件不存在；另一个学期（Spring 2025）用于验证学期隔离。
pub struct Fixture {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub media: MediaStore,
    pub semester: Semester,
    pub other_semester: Semester,
    pub student: User,
    pub ta: User,
    pub outsider: User,
    pub other_student: User,
    pub admin: User,
    pub no_profile: User,
    _media_dir: TempDir,
}

impl Fixture {
    pub async fn new() -> Self {
        let storage = memory_storage().await;
        let s = storage.as_ref();

        let media_dir = TempDir::new().expect("create temp media dir");
        let files = media_dir.path().join("files");
        std::fs::create_dir_all(&files).expect("create files dir");
        std::fs::write(files.join("upload_1.pdf"), SYLLABUS_BYTES).expect("write syllabus");
        std::fs::write(files.join("upload_2.pdf"), SOLUTIONS_BYTES).expect("write solutions");
        std::fs::write(files.join("notes"), TA_NOTES_BYTES).expect("write notes");
        std::fs::write(files.join("key.txt"), EXAM_KEY_BYTES).expect("write key");

        let semester = create_semester(s, 2024, Term::Fall).await;
        let other_semester = create_semester(s, 2025, Term::Spring).await;

        create_material(s, "syllabus1", "files/upload_1.pdf", semester.id, AccessTier::Public).await;
        create_material(
            s,
            "hw1-solutions",
            "files/upload_2.pdf",
            semester.id,
            AccessTier::Student,
        )
        .await;
        create_material(s, "ta-notes", "files/notes", semester.id, AccessTier::Ta).await;
        create_material(s, "exam-key", "files/key.txt", semester.id, AccessTier::Admin).await;
        create_material(s, "lost", "files/lost.pdf", semester.id, AccessTier::Public).await;

        let student = create_person(s, "student", 1001).await;
        let ta = create_person(s, "assistant", 1002).await;
        let outsider = create_person(s, "outsider", 1003).await;
        let other_student = create_person(s, "other", 1004).await;
        let admin = create_user(s, "root", true).await;
        let no_profile = create_user(s, "visitor", false).await;

        add_membership(s, MembershipKind::Enrolling, student.id, semester.id).await;
        add_membership(s, MembershipKind::TeachingAssisting, ta.id, semester.id).await;
        add_membership(s, MembershipKind::Enrolling, other_student.id, other_semester.id).await;

        Self {
            storage,
            cache: Arc::new(MokaCacheWrapper::with_settings(100, 60)),
            media: MediaStore::new(media_dir.path()),
            semester,
            other_semester,
            student,
            ta,
            outsider,
            other_student,
            admin,
            no_profile,
            _media_dir: media_dir,
        }
    }
}
