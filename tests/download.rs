//! 资料下载端到端测试

#[macro_use]
mod common;

use actix_web::http::{StatusCode, header};
use actix_web::test;

use rust_course_backend::cache::CacheResult;
use rust_course_backend::middlewares::ResolveIdentity;
use rust_course_backend::models::memberships::entities::MembershipKind;
use rust_course_backend::models::persons::requests::CreatePersonRequest;

use common::{
    EXAM_KEY_BYTES, Fixture, SOLUTIONS_BYTES, SYLLABUS_BYTES, TA_NOTES_BYTES, add_membership,
    bearer, create_person,
};

fn content_disposition<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn ping_returns_pong() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get().uri("/api/course/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "pong");

    // 健康检查不受令牌影响
    let req = test::TestRequest::get()
        .uri("/api/course/ping")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn anonymous_downloads_public_material() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get()
        .uri("/api/course/file/syllabus1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
    assert_eq!(
        content_disposition(&resp),
        "attachment; filename=syllabus1.pdf"
    );
    assert_eq!(test::read_body(resp).await, SYLLABUS_BYTES);
}

#[actix_web::test]
async fn anonymous_is_denied_student_material() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get()
        .uri("/api/course/file/hw1-solutions")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn enrolled_student_downloads_student_material() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get()
        .uri("/api/course/file/hw1-solutions")
        .insert_header(bearer(fx.student.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        content_disposition(&resp),
        "attachment; filename=hw1-solutions.pdf"
    );
    assert_eq!(test::read_body(resp).await, SOLUTIONS_BYTES);
}

#[actix_web::test]
async fn ta_downloads_ta_material_but_student_cannot() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get()
        .uri("/api/course/file/ta-notes")
        .insert_header(bearer(fx.ta.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    // 存储文件没有扩展名
    assert_eq!(content_disposition(&resp), "attachment; filename=ta-notes");
    assert_eq!(test::read_body(resp).await, TA_NOTES_BYTES);

    let req = test::TestRequest::get()
        .uri("/api/course/file/ta-notes")
        .insert_header(bearer(fx.student.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn empty_name_is_bad_request() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get().uri("/api/course/file/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn unknown_name_is_not_found() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get()
        .uri("/api/course/file/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn admin_downloads_admin_material_without_profile() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get()
        .uri("/api/course/file/exam-key")
        .insert_header(bearer(fx.admin.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, EXAM_KEY_BYTES);

    let req = test::TestRequest::get()
        .uri("/api/course/file/exam-key")
        .insert_header(bearer(fx.ta.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn membership_is_scoped_to_the_material_semester() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    // 在另一个学期选课不授予本学期的访问权
    for user_id in [fx.other_student.id, fx.outsider.id, fx.no_profile.id] {
        let req = test::TestRequest::get()
            .uri("/api/course/file/hw1-solutions")
            .insert_header(bearer(user_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "user {user_id}");
    }

    // 公开资料对所有身份开放
    let req = test::TestRequest::get()
        .uri("/api/course/file/syllabus1")
        .insert_header(bearer(fx.no_profile.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn invalid_credentials_are_unauthorized() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let cases = [
        "Bearer not-a-jwt".to_string(),
        "Basic dXNlcjpwYXNz".to_string(),
        bearer(999_999).1, // 用户不存在
    ];

    for value in cases {
        let req = test::TestRequest::get()
            .uri("/api/course/file/syllabus1")
            .insert_header(("Authorization", value.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{value}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 1001);
    }
}

#[actix_web::test]
async fn download_by_file_name_with_extension() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let material = fx
        .storage
        .find_file_material_by_name("syllabus1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(material.url(), "/api/course/file/syllabus1.pdf");

    let req = test::TestRequest::get().uri(&material.url()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, SYLLABUS_BYTES);

    // 扩展名必须与存储文件一致
    let req = test::TestRequest::get()
        .uri("/api/course/file/syllabus1.txt")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_stored_file_is_not_found() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);

    let req = test::TestRequest::get()
        .uri("/api/course/file/lost")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn token_cache_holds_only_user_id() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);
    let auth = bearer(fx.student.id);
    let token = auth.1.trim_start_matches("Bearer ").to_string();

    let key = ResolveIdentity::cache_key(&token);
    assert_eq!(fx.cache.get_raw(&key).await, CacheResult::NotFound);

    let req = test::TestRequest::get()
        .uri("/api/course/file/hw1-solutions")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        fx.cache.get_raw(&key).await,
        CacheResult::Found(fx.student.id.to_string())
    );
}

#[actix_web::test]
async fn deleted_admin_loses_access_immediately() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);
    let auth = bearer(fx.admin.id);

    let req = test::TestRequest::get()
        .uri("/api/course/file/exam-key")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(fx.storage.delete_user(fx.admin.id).await.unwrap());

    // 令牌仍在缓存中，但用户已不存在
    let req = test::TestRequest::get()
        .uri("/api/course/file/exam-key")
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn new_enrollment_takes_effect_immediately() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);
    let auth = bearer(fx.no_profile.id);

    let req = test::TestRequest::get()
        .uri("/api/course/file/hw1-solutions")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    fx.storage
        .create_person(CreatePersonRequest {
            user_id: fx.no_profile.id,
            employee_id: 2001,
            academic_email: "visitor@uni.edu".to_string(),
            github_url: None,
            linkedin_url: None,
            image: None,
        })
        .await
        .unwrap();
    add_membership(
        fx.storage.as_ref(),
        MembershipKind::Enrolling,
        fx.no_profile.id,
        fx.semester.id,
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/course/file/hw1-solutions")
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn enrolled_ta_gets_ta_tier() {
    let fx = Fixture::new().await;
    let app = init_app!(fx);
    let s = fx.storage.as_ref();

    let both = create_person(s, "both", 3001).await;
    add_membership(s, MembershipKind::Enrolling, both.id, fx.semester.id).await;
    add_membership(s, MembershipKind::TeachingAssisting, both.id, fx.semester.id).await;

    for name in ["ta-notes", "hw1-solutions"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/course/file/{name}"))
            .insert_header(bearer(both.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{name}");
    }

    let req = test::TestRequest::get()
        .uri("/api/course/file/exam-key")
        .insert_header(bearer(both.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
