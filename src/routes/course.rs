use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::MaterialService;

// 懒加载的全局 MaterialService 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

pub async fn ping() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("pong")
}

pub async fn handle_download(
    request: HttpRequest,
    name: web::Path<String>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .handle_download(&request, name.into_inner())
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    // 健康检查不解析身份
    cfg.route("/api/course/ping", web::get().to(ping)).service(
        web::scope("/api/course")
            .wrap(middlewares::ResolveIdentity)
            // 允许空名称进入处理函数，由其返回 400
            .route("/file/{name:[^/]*}", web::get().to(handle_download)),
    );
}
