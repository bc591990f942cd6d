#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Anything other than an explicit `register` request lands on the login
/// form, including absent or misspelled `mode` values.
pub fn normalize_mode(raw: Option<&str>) -> AuthMode {
    match raw {
        Some("register") => AuthMode::Register,
        _ => AuthMode::Login,
    }
}

/// At least eight characters with an uppercase letter, a lowercase letter
/// and a digit.
pub fn is_password_strong(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.".into());
    }
    if password.is_empty() {
        return Err("Enter your password.".into());
    }
    Ok(())
}

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Enter a username.".into());
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.".into());
    }
    if !is_password_strong(password) {
        return Err(
            "Password must be at least 8 characters and include an uppercase letter, a lowercase letter and a digit.".into(),
        );
    }
    if password != confirm {
        return Err("Passwords do not match.".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_login() {
        assert_eq!(normalize_mode(None), AuthMode::Login);
        assert_eq!(normalize_mode(Some("login")), AuthMode::Login);
        assert_eq!(normalize_mode(Some("signup")), AuthMode::Login);
        assert_eq!(normalize_mode(Some("register")), AuthMode::Register);
    }

    #[test]
    fn password_strength_rules() {
        assert!(is_password_strong("Abcdef12"));
        assert!(!is_password_strong("Abcdef1"));
        assert!(!is_password_strong("abcdefg1"));
        assert!(!is_password_strong("ABCDEFG1"));
        assert!(!is_password_strong("Abcdefgh"));
    }

    #[test]
    fn login_validation() {
        assert!(validate_login("a@b.com", "pw").is_ok());
        assert!(validate_login("", "pw").is_err());
        assert!(validate_login("not-an-email", "pw").is_err());
        assert!(validate_login("a@b.com", "").is_err());
    }

    #[test]
    fn registration_validation() {
        assert!(validate_registration("alice", "a@b.com", "Abcdef12", "Abcdef12").is_ok());
        assert!(validate_registration("", "a@b.com", "Abcdef12", "Abcdef12").is_err());
        assert!(validate_registration("alice", "a@b.com", "weak", "weak").is_err());
        assert!(validate_registration("alice", "a@b.com", "Abcdef12", "Abcdef13").is_err());
    }
}
