use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::Claims;
use crate::error::AppError;

/// Authenticated caller, built from the claims `SessionExtract` stored in
/// request extensions.
///
/// Use `Option<CurrentUser>` for routes where a session is optional.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Stable user identity issued by the session provider
    pub sub: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<Claims>()
            .map(|claims| CurrentUser {
                sub: claims.sub.clone(),
            })
            .ok_or_else(AppError::unauthorized_missing_bearer);
        ready(user)
    }
}
