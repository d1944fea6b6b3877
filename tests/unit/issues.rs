// Validation-only tests for issues

#[test]
fn validate_issue_create_and_update() {
    use issuedive::validation::issue::{validate_create_issue, validate_update_issue};

    assert!(validate_create_issue("Title").is_ok());
    assert!(validate_create_issue("").is_err());
    assert!(validate_create_issue("   ").is_err());
    assert!(validate_create_issue(&"a".repeat(513)).is_err());

    assert!(validate_update_issue(Some("New title")).is_ok());
    assert!(validate_update_issue(None).is_ok());
    assert!(validate_update_issue(Some("  ")).is_err());
    assert!(validate_update_issue(Some(&"a".repeat(513))).is_err());
}

#[test]
fn status_parse_and_wire_format() {
    use issuedive::db::enums::IssueStatus;

    assert_eq!(IssueStatus::parse("open"), Some(IssueStatus::Open));
    assert_eq!(IssueStatus::parse("CLOSED"), Some(IssueStatus::Closed));
    assert_eq!(IssueStatus::parse("reopened"), None);

    // JSON uses uppercase names
    assert_eq!(
        serde_json::to_string(&IssueStatus::Open).unwrap(),
        "\"OPEN\""
    );
    let parsed: IssueStatus = serde_json::from_str("\"CLOSED\"").unwrap();
    assert_eq!(parsed, IssueStatus::Closed);
}
