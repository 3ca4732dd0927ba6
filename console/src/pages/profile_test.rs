use super::*;

#[test]
fn validate_password_change_builds_the_request() {
    let request = validate_password_change("old-secret", "new-secret", "new-secret").unwrap();
    assert_eq!(request.old_password, "old-secret");
    assert_eq!(request.new_password, "new-secret");
}

#[test]
fn validate_password_change_requires_the_current_password() {
    assert_eq!(
        validate_password_change("", "new-secret", "new-secret"),
        Err("Enter your current password.")
    );
}

#[test]
fn validate_password_change_enforces_minimum_length_before_match() {
    assert_eq!(
        validate_password_change("old", "short", "different"),
        Err("New password must be at least 6 characters.")
    );
}

#[test]
fn validate_password_change_rejects_a_mismatched_confirmation() {
    assert_eq!(
        validate_password_change("old", "new-secret", "new-secrat"),
        Err("Passwords do not match.")
    );
}
