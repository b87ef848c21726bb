//! Client-side form validation.
//!
//! Failures here block submission and are rendered inline; they never reach
//! the network.

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Sign-up form rules: every field present, a well-formed email, and a
/// password of at least 8 characters.
pub fn validate_signup(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<(), String> {
    let required = [first_name, last_name, email, phone, password];
    if required.iter().any(|f| f.trim().is_empty()) {
        return Err("All fields are required".to_string());
    }
    if !is_email(email.trim()) {
        return Err("Enter a valid email address".to_string());
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    Ok(())
}

/// Sign-in form rules.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password are required".to_string());
    }
    if !is_email(email.trim()) {
        return Err("Enter a valid email address".to_string());
    }
    Ok(())
}

/// API-config modal rules. The key value is only mandatory when creating;
/// an edit that leaves it blank keeps the stored value.
pub fn validate_config(key_name: &str, key_value: &str, is_new: bool) -> Result<(), String> {
    if key_name.trim().is_empty() {
        return Err("Key name is required".to_string());
    }
    if is_new && key_value.trim().is_empty() {
        return Err("Key value is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_requires_every_field() {
        let err = validate_signup("Ada", "", "ada@example.com", "555", "longenough").unwrap_err();
        assert_eq!(err, "All fields are required");
    }

    #[test]
    fn test_signup_rejects_malformed_email() {
        assert!(validate_signup("Ada", "L", "not-an-email", "555", "longenough").is_err());
        assert!(validate_signup("Ada", "L", "a@b", "555", "longenough").is_err());
        assert!(validate_signup("Ada", "L", "ada@example.com", "555", "longenough").is_ok());
    }

    #[test]
    fn test_signup_enforces_password_length() {
        let err = validate_signup("Ada", "L", "ada@example.com", "555", "short").unwrap_err();
        assert_eq!(err, "Password must be at least 8 characters");
    }

    #[test]
    fn test_login_rules() {
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("ada@example.com", "").is_err());
        assert!(validate_login("ada@example.com", "secret").is_ok());
    }

    #[test]
    fn test_config_key_value_only_required_when_new() {
        assert!(validate_config("GEMINI_API_KEY", "", true).is_err());
        assert!(validate_config("GEMINI_API_KEY", "", false).is_ok());
        assert!(validate_config("", "value", true).is_err());
        assert!(validate_config("GEMINI_API_KEY", "value", true).is_ok());
    }
}
