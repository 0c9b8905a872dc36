use super::*;

// =============================================================
// Client-side registration checks
// =============================================================

#[test]
fn mismatched_passwords_are_rejected_first() {
    assert_eq!(
        validate_registration("secret", "secrte"),
        Err("Passwords do not match".to_owned())
    );
}

#[test]
fn short_passwords_are_rejected() {
    assert_eq!(
        validate_registration("abc", "abc"),
        Err("Password must be at least 4 characters".to_owned())
    );
}

#[test]
fn four_characters_is_enough() {
    assert_eq!(validate_registration("abcd", "abcd"), Ok(()));
}
