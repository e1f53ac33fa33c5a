use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password must be at least 8 characters")]
    TooShort,
    #[error("Password must contain an uppercase letter")]
    MissingUppercase,
    #[error("Password must contain a lowercase letter")]
    MissingLowercase,
    #[error("Password must contain a digit")]
    MissingDigit,
    #[error("Passwords do not match")]
    Mismatch,
}

/// Per-rule results, used for the live requirement checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub matches: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str, confirmation: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            matches: !password.is_empty() && password == confirmation,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.digit && self.matches
    }

    /// Checklist rows in display order.
    pub fn items(&self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.length),
            ("Contains an uppercase letter", self.uppercase),
            ("Contains a lowercase letter", self.lowercase),
            ("Contains a digit", self.digit),
            ("Passwords match", self.matches),
        ]
    }
}

/// Checks the complexity rules in order and reports the first failure.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let checks = PasswordChecks::evaluate(password, "");
    if !checks.length {
        return Err(ValidationError::TooShort);
    }
    if !checks.uppercase {
        return Err(ValidationError::MissingUppercase);
    }
    if !checks.lowercase {
        return Err(ValidationError::MissingLowercase);
    }
    if !checks.digit {
        return Err(ValidationError::MissingDigit);
    }
    Ok(())
}

/// Complexity rules first, then the confirmation.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    validate_password(password)?;
    if password != confirmation {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_each_missing_rule() {
        assert_eq!(validate_password("Ab1"), Err(ValidationError::TooShort));
        assert_eq!(validate_password("abcdefg1"), Err(ValidationError::MissingUppercase));
        assert_eq!(validate_password("ABCDEFG1"), Err(ValidationError::MissingLowercase));
        assert_eq!(validate_password("Abcdefgh"), Err(ValidationError::MissingDigit));
        assert_eq!(validate_password("Abcdefg1"), Ok(()));
    }

    #[test]
    fn length_is_checked_before_character_classes() {
        assert_eq!(validate_password(""), Err(ValidationError::TooShort));
        assert_eq!(validate_password("abc"), Err(ValidationError::TooShort));
    }

    #[test]
    fn confirmation_must_match() {
        assert_eq!(
            validate_new_password("Abcdefg1", "Abcdefg2"),
            Err(ValidationError::Mismatch)
        );
        assert_eq!(
            validate_new_password("short", "short"),
            Err(ValidationError::TooShort)
        );
        assert_eq!(validate_new_password("Abcdefg1", "Abcdefg1"), Ok(()));
    }

    #[test]
    fn checklist_tracks_every_rule() {
        let checks = PasswordChecks::evaluate("Abcdefg1", "Abcdefg1");
        assert!(checks.all_passed());

        let checks = PasswordChecks::evaluate("abcdefgh", "abcdefgh");
        assert!(checks.length && checks.lowercase && checks.matches);
        assert!(!checks.uppercase && !checks.digit);
        assert!(!checks.all_passed());

        let empty = PasswordChecks::evaluate("", "");
        assert!(!empty.matches);
    }
}
