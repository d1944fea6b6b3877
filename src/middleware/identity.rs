use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{error::AppError, services::context::RequestContext};

/// Header carrying the acting user's id. A placeholder for real session or
/// token auth, matching the API contract.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the acting user on endpoints that need an identity.
#[derive(Clone, Copy, Debug)]
pub struct ActingUser(pub Uuid);

impl ActingUser {
    pub fn context(&self) -> RequestContext {
        RequestContext { user_id: self.0 }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or_else(|| AppError::auth("Missing or invalid X-User-Id header"))?;

        Ok(ActingUser(user_id))
    }
}
