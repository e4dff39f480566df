//! Chirp content rules: the length cap and the banned-word mask.

use thiserror::Error;

/// Longest accepted chirp body, in bytes.
pub const MAX_CHIRP_LEN: usize = 140;

/// Replacement for every banned word.
pub const MASK: &str = "****";

const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChirpError {
    #[error("Chirp is too long")]
    TooLong,
}

/// Rejects bodies longer than [`MAX_CHIRP_LEN`] bytes.
pub fn validate_chirp(body: &str) -> Result<(), ChirpError> {
    if body.len() > MAX_CHIRP_LEN {
        return Err(ChirpError::TooLong);
    }
    Ok(())
}

/// Masks banned words.
///
/// Tokens are split on single spaces and compared case-insensitively against
/// the whole token, so `Kerfuffle!` is left alone. Runs of spaces produce
/// empty tokens which are kept, so the output has the same spacing as the input.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if BANNED_WORDS.contains(&word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
