//! Account credential rules.

/// Longest accepted username, in characters.
pub const USERNAME_MAX_LEN: usize = 150;

/// Shortest accepted password, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

const COMMON_PASSWORDS: &[&str] = &[
    "123456", "12345678", "123456789", "1234567890", "password", "password1", "password123",
    "qwerty", "qwerty123", "qwertyuiop", "abc123", "111111", "iloveyou", "letmein", "welcome",
    "monkey", "dragon", "football", "baseball", "sunshine", "princess", "trustno1", "superman",
    "starwars", "whatever", "passw0rd", "admin123", "changeme", "1q2w3e4r", "zaq12wsx",
];

/// Reasons a username is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("This field is required.")]
    Required,
    #[error("Ensure this value has at most 150 characters (it has {0}).")]
    TooLong(usize),
    #[error(
        "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
    )]
    InvalidCharacters,
}

/// Reasons a password is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("This field is required.")]
    Required,
    #[error("This password is too short. It must contain at least 8 characters.")]
    TooShort,
    #[error("This password is entirely numeric.")]
    EntirelyNumeric,
    #[error("This password is too common.")]
    TooCommon,
    #[error("The password is too similar to the username.")]
    TooSimilar,
}

/// Validate a username: 1-150 chars of letters, digits and `@.+-_`.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.is_empty() {
        return Err(UsernameError::Required);
    }
    let len = username.chars().count();
    if len > USERNAME_MAX_LEN {
        return Err(UsernameError::TooLong(len));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(UsernameError::InvalidCharacters);
    }
    Ok(())
}

/// Loose email shape check: `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
}

/// Check a new password against the strength rules. Returns every rule it breaks.
pub fn validate_password(password: &str, username: &str) -> Vec<PasswordError> {
    if password.is_empty() {
        return vec![PasswordError::Required];
    }
    let mut problems = Vec::new();
    let lowered = password.to_lowercase();
    let username = username.to_lowercase();
    if username.len() >= 3 && lowered.contains(&username) {
        problems.push(PasswordError::TooSimilar);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        problems.push(PasswordError::TooShort);
    }
    if COMMON_PASSWORDS.contains(&lowered.trim()) {
        problems.push(PasswordError::TooCommon);
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push(PasswordError::EntirelyNumeric);
    }
    problems
}
