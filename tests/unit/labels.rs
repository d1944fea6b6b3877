// Validation and duplicate-policy tests for labels

use chrono::Utc;
use issuedive::db::models::label::Label;
use issuedive::services::labels_service::name_conflict;
use uuid::Uuid;

fn stored_label(name: &str) -> Label {
    let now = Utc::now();
    Label {
        id: Uuid::new_v4(),
        name: name.to_string(),
        color: "#FF0000".to_string(),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn duplicate_label_names_fold_case() {
    let existing = stored_label("Bug");

    assert!(name_conflict(&[existing.clone()], "bug", None).is_some());
    assert!(name_conflict(&[existing.clone()], "BUG", None).is_some());
    assert!(name_conflict(&[existing], "feature", None).is_none());
}

#[test]
fn self_rename_is_not_a_conflict() {
    let existing = stored_label("Bug");
    let own_id = existing.id;

    // renaming the label to its own name, any casing, is a no-op
    assert!(name_conflict(&[existing.clone()], "BUG", Some(own_id)).is_none());

    // but a clash with a different label still conflicts
    let other = stored_label("bug");
    assert!(name_conflict(&[other], "Bug", Some(own_id)).is_some());
}

#[test]
fn validate_label_color_and_name() {
    use issuedive::validation::label::validate_create_label;

    assert!(validate_create_label("bug", "#FF00AA").is_ok());
    assert!(validate_create_label("bug", "#ff00aa").is_ok());
    assert!(validate_create_label(" ", "#FF00AA").is_err());
    assert!(validate_create_label("bug", "123456").is_err());
    assert!(validate_create_label("bug", "#12345").is_err());
    assert!(validate_create_label("bug", "#GG0000").is_err());
    assert!(validate_create_label(&"a".repeat(256), "#FF00AA").is_err());
}

#[test]
fn validate_update_label_rules() {
    use issuedive::validation::label::{UpdateLabelFields, validate_update_label};

    // no fields -> error
    let fields = UpdateLabelFields {
        name: None,
        color: None,
        description_present: false,
    };
    assert!(validate_update_label(&fields).is_err());

    // empty name -> error
    let fields = UpdateLabelFields {
        name: Some("  "),
        color: None,
        description_present: false,
    };
    assert!(validate_update_label(&fields).is_err());

    // bad color -> error
    let fields = UpdateLabelFields {
        name: None,
        color: Some("red"),
        description_present: false,
    };
    assert!(validate_update_label(&fields).is_err());

    // valid with name only
    let fields = UpdateLabelFields {
        name: Some("feature"),
        color: None,
        description_present: false,
    };
    assert!(validate_update_label(&fields).is_ok());

    // valid with color only
    let fields = UpdateLabelFields {
        name: None,
        color: Some("#00FF00"),
        description_present: false,
    };
    assert!(validate_update_label(&fields).is_ok());

    // clearing the description alone is a valid update
    let fields = UpdateLabelFields {
        name: None,
        color: None,
        description_present: true,
    };
    assert!(validate_update_label(&fields).is_ok());
}
