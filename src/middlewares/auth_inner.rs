//! AuthMiddleware 인증 로직의 핵심 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::config::CookieConfig;
use crate::core::errors::AppError;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();

            match authenticate(&req, &token_service) {
                Ok(user) => {
                    log::debug!("Authenticated user {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::debug!("Authentication rejected for {}: {}", req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 헤더 또는 쿠키에서 토큰을 찾아 검증합니다.
fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> Result<AuthenticatedUser, AppError> {
    let header_token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(|h| token_service.extract_bearer_token(h).map(str::to_string))
        .transpose()?;

    let token = match header_token {
        Some(token) => token,
        None => req
            .cookie(CookieConfig::TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Unauthorized".to_string()))?,
    };

    let user_id = token_service.verify(&token)?;
    Ok(AuthenticatedUser::new(user_id))
}
