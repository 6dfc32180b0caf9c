/*!
 * 速率限制中间件
 *
 * 限制公开写接口（留言提交）的请求频率。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::resource("/contact/submit/")
 *             .wrap(RateLimit::contact())
 *             .route(web::post().to(submit_contact))
 *     )
 * ```
 *
 * ## 限制规则
 *
 * - 使用客户端 IP 作为限制键
 * - 放行的请求会刷新计数的存活时间，安静一个窗口后计数清零
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

const MAX_TRACKED_CLIENTS: u64 = 100_000;

/// 速率限制配置
///
/// 每个实例持有自己的计数缓存，缓存随 `Transform` 克隆共享。
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u64,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
    counters: Cache<String, u64>,
}

impl RateLimit {
    pub fn new(max_requests: u64, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
            counters: Cache::builder()
                .time_to_live(Duration::from_secs(window_secs.max(1)))
                .max_capacity(MAX_TRACKED_CLIENTS)
                .build(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 留言提交限制，次数与窗口取自配置
    pub fn contact() -> Self {
        let config = &AppConfig::get().contact;
        Self::new(config.max_requests, config.window_secs).with_prefix("contact")
    }

    fn cache_key(&self, client: &str) -> String {
        if self.key_prefix.is_empty() {
            client.to_string()
        } else {
            format!("{}:{}", self.key_prefix, client)
        }
    }
}

/// 从请求中提取客户端 IP
///
/// 部署在反向代理后面时依赖代理写入的 X-Forwarded-For / X-Real-IP 头，
/// 格式不合法的头会被忽略。
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let limit = self.limit.clone();

        Box::pin(async move {
            let cache_key = limit.cache_key(&extract_client_ip(&req));

            let current_count = limit.counters.get(&cache_key).await.unwrap_or(0);
            if current_count >= limit.max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, limit.max_requests
                );
                return Ok(req.into_response(
                    create_rate_limit_response(limit.window_secs).map_into_right_body(),
                ));
            }

            limit
                .counters
                .entry(cache_key)
                .and_upsert_with(|entry| async move {
                    entry.map(|e| e.into_value() + 1).unwrap_or(1)
                })
                .await;

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_service, init_service};
    use actix_web::{App, web};

    async fn ok() -> HttpResponse {
        HttpResponse::Created().finish()
    }

    #[test]
    fn test_cache_key_prefix() {
        let limit = RateLimit::new(5, 300).with_prefix("contact");
        assert_eq!(limit.cache_key("10.0.0.1"), "contact:10.0.0.1");
        assert_eq!(RateLimit::new(1, 1).cache_key("10.0.0.1"), "10.0.0.1");
    }

    #[actix_web::test]
    async fn test_requests_over_limit_are_rejected() {
        let app = init_service(
            App::new().service(
                web::resource("/submit")
                    .wrap(RateLimit::new(2, 60).with_prefix("test"))
                    .route(web::post().to(ok)),
            ),
        )
        .await;

        for _ in 0..2 {
            let req = TestRequest::post()
                .uri("/submit")
                .insert_header(("X-Forwarded-For", "10.1.1.1"))
                .to_request();
            let resp = call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = TestRequest::post()
            .uri("/submit")
            .insert_header(("X-Forwarded-For", "10.1.1.1"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

        // 其他客户端不受影响
        let req = TestRequest::post()
            .uri("/submit")
            .insert_header(("X-Forwarded-For", "10.1.1.2"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
