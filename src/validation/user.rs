use crate::error::AppError;

pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<(), AppError> {
    if username.trim().is_empty() {
        return Err(AppError::validation("Username is required"));
    }
    if username.len() > 100 {
        return Err(AppError::validation(
            "Username is too long (max 100 characters)",
        ));
    }
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email format"));
    }
    if password.len() < 8 {
        return Err(AppError::validation(
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}
