//! Bearer-token auth middleware.
//!
//! A single shared anonymous API key is presented by every client; there is
//! no per-user auth model. Comparison is constant-time.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use coderfest_core::AppError;
use subtle::ConstantTimeEq;

use crate::error::HttpAppError;

#[derive(Clone)]
pub struct AuthState {
    pub api_key: String,
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let token = match auth_header.strip_prefix("Bearer ") {
        Some(t) => t,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Authorization header must use the Bearer scheme".to_string(),
            ))
            .into_response();
        }
    };

    if !secure_compare(token, &auth_state.api_key) {
        return HttpAppError(AppError::Unauthorized("Invalid API key".to_string()))
            .into_response();
    }

    next.run(request).await
}
