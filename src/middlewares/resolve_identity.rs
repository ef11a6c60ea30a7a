/*!
 * 请求方身份解析中间件
 *
 * 令牌由外部认证系统签发，此中间件只负责把 Bearer 令牌解析为 [`Identity`]，
 * 是否允许访问由具体的业务逻辑决定。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::ResolveIdentity;
 *
 * App::new().service(
 *     web::scope("/api/course")
 *         .wrap(ResolveIdentity)
 *         .route("/file/{name}", web::get().to(handler)),
 * );
 *
 * async fn handler(req: HttpRequest) -> HttpResponse {
 *     match ResolveIdentity::extract_identity(&req) {
 *         Some(identity) => HttpResponse::Ok().body(identity.display_name()),
 *         None => HttpResponse::Ok().body("anonymous"),
 *     }
 * }
 * ```
 *
 * ## 解析规则
 *
 * 1. 没有 `Authorization` 请求头：匿名请求，直接放行
 * 2. 请求头不是 `Bearer <JWT>`、令牌无效或用户不存在：返回 401
 * 3. 解析成功：身份写入请求扩展
 *
 * 令牌校验结果（用户ID）按令牌缓存，有效期不超过令牌本身；
 * 身份每次请求都从存储读取，权限变更立即生效。
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::users::entities::Identity;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, error, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct ResolveIdentity;

// 身份解析失败的原因
enum IdentityError {
    Unauthorized(String),
    Internal(String),
}

// 缓存有效期：不超过令牌剩余有效期
fn cache_ttl(exp: usize) -> u64 {
    let remaining = (exp as i64 - chrono::Utc::now().timestamp()).max(0) as u64;
    remaining.min(AppConfig::get().cache.default_ttl)
}

// 辅助函数：校验令牌得到用户ID，校验结果按令牌缓存
async fn resolve_user_id(
    token: &str,
    cache: Option<&Arc<dyn ObjectCache>>,
) -> Result<i64, IdentityError> {
    let key = ResolveIdentity::cache_key(token);

    if let Some(cache) = cache {
        match cache.get_raw(&key).await {
            CacheResult::Found(value) => match value.parse::<i64>() {
                Ok(user_id) => return Ok(user_id),
                Err(_) => {
                    cache.remove(&key).await;
                    info!("Invalid cached user ID, dropping entry");
                }
            },
            CacheResult::NotFound => {
                debug!("Token not found in cache");
            }
        }
    }

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        IdentityError::Unauthorized("Invalid JWT token".to_string())
    })?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| IdentityError::Unauthorized("Invalid user ID in JWT".to_string()))?;

    if let Some(cache) = cache {
        let ttl = cache_ttl(claims.exp);
        if ttl > 0 {
            cache.insert_raw(key, user_id.to_string(), ttl).await;
        }
    }

    Ok(user_id)
}

// 辅助函数：解析请求方身份，没有凭据时返回 None
//
// 身份（超级用户标记、人员档案）每次都从存储读取，缓存中只有令牌到用户ID的映射。
async fn resolve_identity(req: &ServiceRequest) -> Result<Option<Identity>, IdentityError> {
    let Some(header) = req.headers().get(AUTHORIZATION_HEADER) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IdentityError::Unauthorized("Invalid Authorization header".to_string()))?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone());

    let user_id = resolve_user_id(token, cache.as_ref()).await?;

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| IdentityError::Internal("Storage not found in app data".to_string()))?;

    let identity = storage
        .get_identity(user_id)
        .await
        .map_err(|e| IdentityError::Internal(format!("Failed to load identity: {e}")))?
        .ok_or_else(|| IdentityError::Unauthorized("User not found".to_string()))?;

    Ok(Some(identity))
}

impl<S, B> Transform<S, ServiceRequest> for ResolveIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ResolveIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResolveIdentityMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ResolveIdentityMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ResolveIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match resolve_identity(&req).await {
                Ok(Some(identity)) => {
                    debug!("Resolved identity for user ID: {}", identity.user_id());
                    req.extensions_mut().insert(identity);
                }
                Ok(None) => {
                    debug!("Anonymous request to {}", req.path());
                }
                Err(IdentityError::Unauthorized(err)) => {
                    info!(
                        "Identity resolution failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ));
                }
                Err(IdentityError::Internal(err)) => {
                    error!("Identity resolution error for {}: {}", req.path(), err);
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorCode::InternalServerError,
                            "Failed to resolve identity",
                        )
                        .map_into_right_body(),
                    ));
                }
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

impl ResolveIdentity {
    /// 从请求扩展中提取身份，匿名请求返回 None
    pub fn extract_identity(req: &HttpRequest) -> Option<Identity> {
        req.extensions().get::<Identity>().cloned()
    }

    /// 令牌校验结果在缓存中的键
    pub fn cache_key(token: &str) -> String {
        format!("token:{token}")
    }
}
