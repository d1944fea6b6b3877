use crate::error::AppError;

pub fn validate_create_issue(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation("Issue title is required"));
    }
    if title.len() > 512 {
        return Err(AppError::validation(
            "Issue title is too long (max 512 characters)",
        ));
    }
    Ok(())
}

pub fn validate_update_issue(title: Option<&str>) -> Result<(), AppError> {
    if let Some(title) = title {
        if title.trim().is_empty() {
            return Err(AppError::validation("Issue title cannot be empty"));
        }
        if title.len() > 512 {
            return Err(AppError::validation(
                "Issue title is too long (max 512 characters)",
            ));
        }
    }
    Ok(())
}
