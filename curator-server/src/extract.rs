use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

/// Identity of the requester, taken from the `x-user-id` header the
/// upstream auth proxy sets. Absent for anonymous requests.
#[derive(Debug, Clone, Copy)]
pub struct RequestUser(pub Option<Uuid>);

impl<S> FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get("x-user-id") else {
            return Ok(RequestUser(None));
        };

        let user = value
            .to_str()
            .ok()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .ok_or_else(|| {
                AppError::bad_request("Invalid x-user-id header")
            })?;

        Ok(RequestUser(Some(user)))
    }
}
