/*!
 * 管理接口令牌校验中间件
 *
 * 管理接口使用配置中的静态令牌保护，客户端在请求头中携带
 * `Authorization: Bearer <ADMIN_TOKEN>`。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RequireAdmin;
 *
 * App::new()
 *     .service(
 *         web::scope("/api/v1/admin")
 *             .wrap(RequireAdmin::from_config())
 *             .route("/classes", web::get().to(list_classes))
 *     )
 * ```
 *
 * ## 校验规则
 *
 * - 未配置令牌时管理接口整体关闭，返回 503
 * - 缺少或错误的令牌返回 401
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use super::create_error_response;
use crate::config::AppConfig;
use crate::models::ErrorCode;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireAdmin {
    token: Rc<str>,
}

impl RequireAdmin {
    pub fn new(token: &str) -> Self {
        Self {
            token: Rc::from(token.trim()),
        }
    }

    /// 使用全局配置中的管理令牌
    pub fn from_config() -> Self {
        Self::new(&AppConfig::get().admin.token)
    }
}

// 逐字节比较，耗时与首个不同字节的位置无关
fn token_matches(expected: &str, provided: &str) -> bool {
    let (a, b) = (expected.as_bytes(), provided.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn extract_bearer(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
}

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAdminMiddleware {
            service: Rc::new(service),
            token: self.token.clone(),
        }))
    }
}

pub struct RequireAdminMiddleware<S> {
    service: Rc<S>,
    token: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminMiddleware<S>
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
        let token = self.token.clone();

        Box::pin(async move {
            if token.is_empty() {
                debug!("Admin API disabled, rejecting {}", req.path());
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::SERVICE_UNAVAILABLE,
                        ErrorCode::AdminDisabled,
                        "Admin API is disabled",
                    )
                    .map_into_right_body(),
                ));
            }

            match extract_bearer(&req) {
                Some(provided) if token_matches(&token, provided) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                provided => {
                    info!(
                        "Admin authentication failed for request to {} (token present: {})",
                        req.path(),
                        provided.is_some()
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Unauthorized: missing or invalid admin token",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_service, init_service};
    use actix_web::{App, HttpResponse, web};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[test]
    fn test_token_matches() {
        assert!(token_matches("secret", "secret"));
        assert!(!token_matches("secret", "secreT"));
        assert!(!token_matches("secret", "secret2"));
    }

    #[actix_web::test]
    async fn test_bearer_token_required() {
        let app = init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(RequireAdmin::new("secret"))
                    .route("/ping", web::get().to(ok)),
            ),
        )
        .await;

        let req = TestRequest::get().uri("/admin/ping").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = TestRequest::get()
            .uri("/admin/ping")
            .insert_header(("Authorization", "Bearer wrong"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = TestRequest::get()
            .uri("/admin/ping")
            .insert_header(("Authorization", "Bearer secret"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_empty_token_disables_admin() {
        let app = init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(RequireAdmin::new("  "))
                    .route("/ping", web::get().to(ok)),
            ),
        )
        .await;

        let req = TestRequest::get()
            .uri("/admin/ping")
            .insert_header(("Authorization", "Bearer "))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
