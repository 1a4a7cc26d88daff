//! JWT 인증 미들웨어
//!
//! 스코프 단위로 감싸서 토큰을 검증하고, 확인된 사용자를 request extensions에 넣습니다.
//! 토큰은 `Authorization: Bearer <token>` 헤더를 우선하고, 없으면 `token` 쿠키에서 읽습니다.
//!
//! ```rust,ignore
//! web::scope("/progress")
//!     .wrap(AuthMiddleware::required())
//!     .route("", web::get().to(list_progress))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 토큰이 없거나 유효하지 않으면 핸들러 실행 전에 401을 반환합니다.
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
