pub mod comment;
pub mod issue;
pub mod label;
pub mod user;

use axum::{Json, async_trait, extract::FromRequest, http::Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that runs `validator` field checks before the handler.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::validation("Invalid JSON body"))?;

        value.validate().map_err(|errors| {
            let detail = errors
                .field_errors()
                .iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |error| {
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field: {}", field))
                    })
                })
                .collect::<Vec<_>>()
                .join("; ");
            AppError::validation(detail)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Reusable field rules plugged into `#[validate(custom)]`.
pub mod rules {
    use validator::ValidationError;

    pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::new("invalid_username_format"));
        }
        if username.chars().next().is_some_and(|c| c.is_numeric()) {
            return Err(ValidationError::new("username_starts_with_number"));
        }
        Ok(())
    }

}
