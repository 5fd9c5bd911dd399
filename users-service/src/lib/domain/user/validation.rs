use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::user::errors::ValidationFailure;
use crate::user::models::RegisterUserRequest;
use crate::user::models::UserRole;

/// local-part @ domain . tld-like suffix, no embedded whitespace.
/// Stricter than RFC 5322 on purpose: a dot-less domain is rejected.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

const PASSWORD_MIN_LENGTH: usize = 8;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("invalid email pattern"))
}

/// Check a registration request against every rule and return the
/// complete failure set.
///
/// Rules are independent and all evaluated; the caller receives every
/// violation in one pass rather than the first one found. An empty
/// result means the request is valid. Pure and deterministic.
pub fn validate(request: &RegisterUserRequest) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if !is_safe_password(&request.password) {
        failures.push(ValidationFailure::UnsafePassword);
    }

    if !is_valid_email(&request.email) {
        failures.push(ValidationFailure::InvalidEmail);
    }

    if request.name.trim().is_empty() {
        failures.push(ValidationFailure::NameRequired);
    }

    if let Some(role) = &request.role {
        if UserRole::from_str(role).is_err() {
            failures.push(ValidationFailure::UnknownRole);
        }
    }

    failures
}

pub fn is_valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    email_regex().is_match(email)
}

pub fn is_safe_password(password: &str) -> bool {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return false;
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return false;
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return false;
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, name: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            role: None,
        }
    }

    #[test]
    fn test_valid_request_has_no_failures() {
        let failures = validate(&request("alice@example.com", "Alice", "StrongP@ssw0rd!"));
        assert!(failures.is_empty());
    }

    #[test]
    fn test_weak_password_is_rejected() {
        // No digit, no special character
        let failures = validate(&request("alice@example.com", "Alice", "weakPass"));
        assert_eq!(failures, vec![ValidationFailure::UnsafePassword]);
    }

    #[test]
    fn test_all_failures_are_reported_together() {
        let failures = validate(&request("valid@email", "", "weakPass"));

        assert_eq!(failures.len(), 3);
        assert!(failures.contains(&ValidationFailure::UnsafePassword));
        assert!(failures.contains(&ValidationFailure::InvalidEmail));
        assert!(failures.contains(&ValidationFailure::NameRequired));
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("missing-tld@example"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("alice@exa mple.com"));
    }

    #[test]
    fn test_password_rules() {
        assert!(is_safe_password("StrongP@ssw0rd!"));

        assert!(!is_safe_password(""));
        assert!(!is_safe_password("Sh0rt!"));
        assert!(!is_safe_password("alllower1!"));
        assert!(!is_safe_password("ALLUPPER1!"));
        assert!(!is_safe_password("NoDigits!!"));
        assert!(!is_safe_password("NoSpecial1"));
    }

    #[test]
    fn test_name_is_trimmed_before_check() {
        let failures = validate(&request("alice@example.com", "   ", "StrongP@ssw0rd!"));
        assert_eq!(failures, vec![ValidationFailure::NameRequired]);
    }

    #[test]
    fn test_unknown_role_is_a_validation_failure() {
        let mut req = request("alice@example.com", "Alice", "StrongP@ssw0rd!");
        req.role = Some("superuser".to_string());

        let failures = validate(&req);
        assert_eq!(failures, vec![ValidationFailure::UnknownRole]);
    }

    #[test]
    fn test_role_names_parse_case_insensitively() {
        let mut req = request("alice@example.com", "Alice", "StrongP@ssw0rd!");
        req.role = Some("ADMINISTRATOR".to_string());

        assert!(validate(&req).is_empty());
    }
}
