//! Bearer-token authentication extractor for the admin routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use murasaki_core::error::CoreError;
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the shared admin token.
///
/// Use this as an extractor parameter in any handler under `/admin`:
///
/// ```ignore
/// async fn my_handler(_admin: AdminToken) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
///
/// The token comparison is constant-time so the check does not leak prefix
/// information through timing.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let expected = state.config.admin_token.as_bytes();
        if token.as_bytes().ct_eq(expected).into() {
            Ok(AdminToken)
        } else {
            Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )))
        }
    }
}
