//! Short code generation policy and custom code validation.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// The 62-symbol alphabet generated codes are drawn from.
pub const CODE_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z_-]{3,20}$").unwrap());

/// Generation policy for short codes.
///
/// Bundles the knobs of the bounded random-retry loop so the alphabet, code
/// length, and retry budget are explicit and test-controllable. The random
/// source is passed in by the caller, so tests can seed a deterministic RNG.
#[derive(Debug, Clone)]
pub struct CodePolicy {
    pub alphabet: &'static [u8],
    pub code_length: usize,
    pub max_attempts: usize,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            alphabet: CODE_ALPHABET,
            code_length: 6,
            max_attempts: 3,
        }
    }
}

impl CodePolicy {
    /// Draws one code uniformly from the policy's alphabet.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.code_length)
            .map(|_| {
                let idx = rng.random_range(0..self.alphabet.len());
                self.alphabet[idx] as char
            })
            .collect()
    }
}

/// Validates a caller-supplied custom short code.
///
/// Custom codes must be 3-20 characters of `[0-9a-zA-Z_-]`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] on any format violation.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Invalid shortcode format",
            json!({ "field": "shortcode", "pattern": "^[0-9a-zA-Z_-]{3,20}$" }),
        ));
    }

    Ok(())
}
