//! Short code generation and validation utilities.
//!
//! Generated codes are drawn from a 62-character alphanumeric alphabet. They
//! are not cryptographically secure and not guaranteed to be unique; callers
//! must check for collisions (see [`crate::application::services::LinkService`]).

use crate::error::AppError;
use rand::Rng;

/// Alphabet used for generated codes: 26 lowercase, 26 uppercase, 10 digits.
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of generated codes (62^6 ≈ 56.8 billion combinations).
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Maximum length of any code, custom or generated, in characters.
pub const MAX_CODE_LENGTH: usize = 32;

/// Generates a random code of exactly `length` characters.
///
/// Each character is drawn independently and uniformly from [`CHARSET`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Validates a code before it is stored.
///
/// Custom codes may use any printable characters; only the length is bounded.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with `"Code too long"` if the code has more
/// than [`MAX_CODE_LENGTH`] characters, `"Code is empty"` if it is empty, or
/// `"Code contains control characters"` if it contains one (PostgreSQL rejects
/// NUL in `TEXT`).
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request("Code is empty"));
    }

    if code.chars().count() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request("Code too long"));
    }

    if code.chars().any(char::is_control) {
        return Err(AppError::bad_request("Code contains control characters"));
    }

    Ok(())
}
