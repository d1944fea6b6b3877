// Validation-only tests for user signup

#[test]
fn validate_signup_rules() {
    use issuedive::validation::user::validate_signup;

    assert!(validate_signup("alice", "alice@example.com", "hunter2hunter2").is_ok());
    assert!(validate_signup("", "alice@example.com", "hunter2hunter2").is_err());
    assert!(validate_signup("alice", "not-an-email", "hunter2hunter2").is_err());
    assert!(validate_signup("alice", "alice@example.com", "short").is_err());
}

#[test]
fn username_format_rules() {
    use issuedive::validation::rules::validate_username_format;

    assert!(validate_username_format("alice_01").is_ok());
    assert!(validate_username_format("Alice-B").is_ok());
    assert!(validate_username_format("no spaces").is_err());
    assert!(validate_username_format("semi;colon").is_err());
}
