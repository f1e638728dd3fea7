//! Signup input validation. Pure functions, no I/O: failures are normal
//! return values carrying per-field feedback, never errors.

use serde::Serialize;

pub const USERNAME_TOO_SHORT: &str = "Username must be atleast 8 characters long";
pub const USERNAME_TOO_LONG: &str = "Username cannot be longer longer than 24 characters";
pub const USERNAME_BAD_CHARS: &str =
    "Only letters, digits, hyphens, underscores or periods are allowed";
pub const EMAIL_INVALID: &str = "Please enter a valid e-mail address";
pub const PASSWORD_INVALID: &str = "Please enter a valid password";
pub const CONFIRMATION_MISMATCH: &str = "Passwords must match";

/// Per-field feedback; an empty string means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupFeedback {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

impl SignupFeedback {
    pub fn is_valid(&self) -> bool {
        self.username.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.confirmation.is_empty()
    }
}

/// Validate raw signup input. The confirmation check is independent of
/// password validity: a mismatched confirmation is reported even when the
/// password itself is rejected.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> SignupFeedback {
    let mut feedback = SignupFeedback::default();

    let username_len = username.chars().count();
    if username_len < 8 {
        feedback.username = USERNAME_TOO_SHORT.to_string();
    } else if username_len > 24 {
        feedback.username = USERNAME_TOO_LONG.to_string();
    } else if !username.chars().all(is_allowed_username_char) {
        feedback.username = USERNAME_BAD_CHARS.to_string();
    }

    if !email_is_valid(email) {
        feedback.email = EMAIL_INVALID.to_string();
    }

    if !password_is_valid(password) {
        feedback.password = PASSWORD_INVALID.to_string();
    }

    if confirmation != password {
        feedback.confirmation = CONFIRMATION_MISMATCH.to_string();
    }

    feedback
}

fn is_allowed_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Shape check only: no whitespace, exactly one `@`, non-empty local part,
/// and at least one `.` inside the domain with text on both sides.
fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Any dot with text on both sides qualifies; a leading or trailing dot
    // alone does not.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// 8-32 characters with at least one digit, one lowercase, one uppercase,
/// and one of `- _ .`.
fn password_is_valid(password: &str) -> bool {
    let len = password.chars().count();
    if !(8..=32).contains(&len) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| matches!(c, '-' | '_' | '.'))
}
