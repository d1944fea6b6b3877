use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::label::{Label, LabelChanges, NewLabel},
    db::repositories::issue_labels::IssueLabelRepo,
    db::repositories::labels::LabelRepo,
    error::{AppError, ErrorCode},
    routes::labels::{CreateLabelRequest, UpdateLabelRequest},
    validation::label::{UpdateLabelFields, validate_create_label, validate_update_label},
};

/// Case-insensitive duplicate scan over candidate rows. The label being
/// renamed never conflicts with itself.
pub fn name_conflict<'a>(
    labels: &'a [Label],
    candidate: &str,
    exclude: Option<Uuid>,
) -> Option<&'a Label> {
    let folded = candidate.to_lowercase();
    labels
        .iter()
        .find(|label| Some(label.id) != exclude && label.name.to_lowercase() == folded)
}

pub struct LabelsService;

impl LabelsService {
    pub fn create(conn: &mut PgConnection, req: &CreateLabelRequest) -> Result<Label, AppError> {
        validate_create_label(&req.name, &req.color)?;

        conn.transaction::<_, AppError, _>(|conn| {
            let same_name = LabelRepo::find_by_name_folded(conn, &req.name)?;
            if name_conflict(&same_name, &req.name, None).is_some() {
                return Err(AppError::duplicate(
                    ErrorCode::DuplicateLabel,
                    format!("Label with name {} already exists", req.name),
                ));
            }

            let new_label = NewLabel {
                name: req.name.clone(),
                color: req.color.clone(),
                description: req.description.clone(),
            };
            Ok(LabelRepo::insert(conn, &new_label)?)
        })
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Label>, AppError> {
        Ok(LabelRepo::list_all(conn)?)
    }

    pub fn get_by_id(conn: &mut PgConnection, label_id: Uuid) -> Result<Label, AppError> {
        LabelRepo::find_by_id(conn, label_id)?
            .ok_or_else(|| AppError::not_found(ErrorCode::LabelNotFound, "Label not found"))
    }

    pub fn update(
        conn: &mut PgConnection,
        label_id: Uuid,
        req: &UpdateLabelRequest,
    ) -> Result<Label, AppError> {
        validate_update_label(&UpdateLabelFields {
            name: req.name.as_deref(),
            color: req.color.as_deref(),
            description_present: req.description.is_some(),
        })?;

        conn.transaction::<_, AppError, _>(|conn| {
            if !LabelRepo::exists_by_id(conn, label_id)? {
                return Err(AppError::not_found(ErrorCode::LabelNotFound, "Label not found"));
            }

            // Renaming to the label's own current name is a no-op, only a
            // clash with a different label is a conflict.
            if let Some(ref new_name) = req.name {
                let same_name = LabelRepo::find_by_name_folded(conn, new_name)?;
                if name_conflict(&same_name, new_name, Some(label_id)).is_some() {
                    return Err(AppError::duplicate(
                        ErrorCode::DuplicateLabel,
                        format!("Label with name {} already exists", new_name),
                    ));
                }
            }

            let changes = LabelChanges {
                name: req.name.clone(),
                color: req.color.clone(),
                description: req.description.clone(),
                updated_at: chrono::Utc::now(),
            };
            Ok(LabelRepo::update_fields(conn, label_id, &changes)?)
        })
    }

    /// Deleting a label detaches it from every issue first.
    pub fn delete(conn: &mut PgConnection, label_id: Uuid) -> Result<(), AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            if !LabelRepo::exists_by_id(conn, label_id)? {
                return Err(AppError::not_found(ErrorCode::LabelNotFound, "Label not found"));
            }
            IssueLabelRepo::delete_by_label(conn, label_id)?;
            LabelRepo::delete_by_id(conn, label_id)?;
            Ok(())
        })
    }
}
