use crate::error::AppError;

fn is_hex_color(color: &str) -> bool {
    color.starts_with('#')
        && color.len() == 7
        && color.chars().skip(1).all(|c| c.is_ascii_hexdigit())
}

pub fn validate_create_label(name: &str, color: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Label name is required"));
    }
    if name.len() > 255 {
        return Err(AppError::validation(
            "Label name is too long (max 255 characters)",
        ));
    }
    if !is_hex_color(color) {
        return Err(AppError::validation("Color must be hex like #RRGGBB"));
    }
    Ok(())
}

pub struct UpdateLabelFields<'a> {
    pub name: Option<&'a str>,
    pub color: Option<&'a str>,
    pub description_present: bool,
}

pub fn validate_update_label(fields: &UpdateLabelFields) -> Result<(), AppError> {
    if fields.name.is_none() && fields.color.is_none() && !fields.description_present {
        return Err(AppError::validation("No update data provided"));
    }
    if let Some(name) = fields.name {
        if name.trim().is_empty() {
            return Err(AppError::validation("Label name cannot be empty"));
        }
        if name.len() > 255 {
            return Err(AppError::validation(
                "Label name is too long (max 255 characters)",
            ));
        }
    }
    if let Some(color) = fields.color {
        if !is_hex_color(color) {
            return Err(AppError::validation("Color must be hex like #RRGGBB"));
        }
    }
    Ok(())
}
