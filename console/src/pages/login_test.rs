use super::*;

#[test]
fn validate_credentials_trims_the_username() {
    assert_eq!(
        validate_credentials("  admin  ", "admin123"),
        Ok(("admin".to_owned(), "admin123".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(
        validate_credentials("", "admin123"),
        Err("Enter both username and password.")
    );
    assert_eq!(validate_credentials("admin", ""), Err("Enter both username and password."));
    assert_eq!(validate_credentials("   ", "x"), Err("Enter both username and password."));
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    assert_eq!(
        validate_credentials("admin", " pass word "),
        Ok(("admin".to_owned(), " pass word ".to_owned()))
    );
}
