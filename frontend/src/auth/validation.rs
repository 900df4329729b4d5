use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Inline form errors. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your {0}")]
    EmptyField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter all 6 digits of the code")]
    IncompleteCode,
}

pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require("email", email)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    require("password", password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

/// New password and its confirmation: both non-empty and identical.
/// Whitespace counts as content here.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyField("new password"));
    }
    if confirm.is_empty() {
        return Err(ValidationError::EmptyField("password confirmation"));
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("  first.last+tag@sub.example.co  ").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["ada", "ada@example", "@example.com", "ada @example.com", "ada@exa mple.com"] {
            assert_eq!(validate_email(bad), Err(ValidationError::InvalidEmail), "{}", bad);
        }
        assert_eq!(validate_email("  "), Err(ValidationError::EmptyField("email")));
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN })
        );
        assert!(validate_password("long enough").is_ok());
    }

    #[test]
    fn mismatched_pairs_are_rejected() {
        let pairs = [("password1", "password2"), ("a", "b"), ("longpassword", "longpassword ")];
        for (password, confirm) in pairs {
            assert_eq!(validate_password_pair(password, confirm), Err(ValidationError::PasswordMismatch));
        }
    }

    #[test]
    fn equal_pairs_are_accepted() {
        assert!(validate_password_pair("correct horse", "correct horse").is_ok());
        assert!(validate_password_pair("x", "x").is_ok());
        assert!(validate_password_pair("   ", "   ").is_ok());
    }

    #[test]
    fn empty_pairs_name_the_missing_field() {
        assert_eq!(validate_password_pair("", ""), Err(ValidationError::EmptyField("new password")));
        assert_eq!(
            validate_password_pair("something", ""),
            Err(ValidationError::EmptyField("password confirmation"))
        );
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match");
        assert_eq!(
            ValidationError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
