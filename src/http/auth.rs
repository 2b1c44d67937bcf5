//! Caller identity extraction.
//!
//! Token validation happens in the upstream identity gateway, which
//! forwards the resolved caller as plain headers. This extractor turns
//! those headers into an [`AuthContext`]; handlers never see raw
//! credentials.
//!
//! Headers:
//! - `X-User-Id` (required): numeric user id
//! - `X-Superuser` (optional): `true`/`1` marks a privileged caller
//! - `X-Class-Id` (optional): the caller's cohort id
//! - `X-Gender` (optional): `Male` or `Female`

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::AppError;
use crate::api::{ClassId, UserId};
use crate::models::auth::AuthContext;
use crate::models::schedule::Gender;

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

impl<S: Send + Sync> FromRequestParts<S> for AuthContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, "x-user-id")
            .and_then(|v| v.parse::<i64>().ok())
            .map(UserId::new)
            .ok_or_else(|| {
                AppError::Unauthorized("missing or malformed X-User-Id header".to_string())
            })?;

        let is_superuser = matches!(header(parts, "x-superuser"), Some("true") | Some("1"));

        let class_id = match header(parts, "x-class-id") {
            Some(raw) => Some(raw.parse::<i64>().map(ClassId::new).map_err(|_| {
                AppError::BadRequest("malformed X-Class-Id header".to_string())
            })?),
            None => None,
        };

        let gender = match header(parts, "x-gender") {
            Some(raw) => Some(match raw.to_ascii_lowercase().as_str() {
                "male" => Gender::Male,
                "female" => Gender::Female,
                _ => {
                    return Err(AppError::BadRequest(
                        "malformed X-Gender header".to_string(),
                    ))
                }
            }),
            None => None,
        };

        Ok(AuthContext {
            user_id,
            is_superuser,
            class_id,
            gender,
        })
    }
}
