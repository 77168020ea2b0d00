use thiserror::Error;

/// Character cap applied when the caller passes no directive at all.
pub const DEFAULT_MAX_LENGTH: i64 = 80;

/// The one malformed input this crate can receive: a length directive whose
/// tail after `L` is not an integer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("invalid length directive `{0}`: expected an integer after `L`")]
    InvalidLength(String),
}

/// Parse an optional format directive into a character budget.
///
/// - `None` caps output at [`DEFAULT_MAX_LENGTH`] characters.
/// - `"L<n>"` caps output at `n` characters.
/// - Any other non-empty directive opts out of the cap entirely.
///
/// A directive that starts with `L` but does not continue with an integer is
/// rejected rather than silently defaulted.
pub fn max_length(format: Option<&str>) -> Result<i64, DirectiveError> {
    match format {
        None => Ok(DEFAULT_MAX_LENGTH),
        Some(f) if f.len() > 1 && f.starts_with('L') => f[1..]
            .parse::<i64>()
            .map_err(|_| DirectiveError::InvalidLength(f.to_string())),
        Some(_) => Ok(i64::MAX),
    }
}
