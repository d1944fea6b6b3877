use crate::error::AppError;

pub fn validate_create_comment(body: &str) -> Result<(), AppError> {
    if body.trim().is_empty() {
        return Err(AppError::validation("Comment body is required"));
    }
    if body.len() > 10000 {
        return Err(AppError::validation(
            "Comment body is too long (max 10000 characters)",
        ));
    }
    Ok(())
}

pub fn validate_update_comment(body: &str) -> Result<(), AppError> {
    if body.trim().is_empty() {
        return Err(AppError::validation("Comment body cannot be empty"));
    }
    if body.len() > 10000 {
        return Err(AppError::validation(
            "Comment body is too long (max 10000 characters)",
        ));
    }
    Ok(())
}
