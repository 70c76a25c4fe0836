//! Session token extraction.
//!
//! Verifies an `Authorization: Bearer` token when one is present and stores
//! its [`Claims`] in request extensions. Requests without the header pass
//! through untouched; routes that need a user ask for `CurrentUser`, which
//! turns missing claims into a 401.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct SessionExtract;

impl<S, B> Transform<S, ServiceRequest> for SessionExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionExtractMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionExtractMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let verified = match bearer_token(req.headers().get(header::AUTHORIZATION)) {
                Ok(None) => None,
                Ok(Some(token)) => match req.app_data::<web::Data<AppState>>() {
                    Some(state) => Some(verify_access_token(&token, &state.security)),
                    None => Some(Err(AppError::internal("AppState not available"))),
                },
                Err(err) => Some(Err(err)),
            };

            match verified {
                Some(Ok(claims)) => {
                    req.extensions_mut().insert(claims);
                }
                Some(Err(err)) => {
                    debug!(code = %err.code(), "rejected session token");
                    let resp = err.error_response();
                    return Ok(req.into_response(resp).map_into_right_body());
                }
                None => {}
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn bearer_token(value: Option<&HeaderValue>) -> Result<Option<String>, AppError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let raw = value
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(Some(token.to_string())),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_parses_header() {
        assert_eq!(bearer_token(None).unwrap(), None);

        let ok = HeaderValue::from_static("Bearer abc.def.ghi");
        assert_eq!(bearer_token(Some(&ok)).unwrap().as_deref(), Some("abc.def.ghi"));

        for bad in ["Basic xyz", "Bearer", "Bearer a b", "bearer abc"] {
            let v = HeaderValue::from_static(bad);
            assert!(bearer_token(Some(&v)).is_err(), "{bad} should be rejected");
        }
    }
}
