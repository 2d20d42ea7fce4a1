//! Session identifier parsing.

use roleplay_core::error::DomainError;
use uuid::Uuid;

/// Parses an externally supplied session identifier.
///
/// Identifiers are issued in lowercase hyphenated form and matched exactly.
/// Any other spelling, including other UUID encodings of an issued id, is
/// reported the same way as an unknown id.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if `raw` is not an identifier in
/// issued form.
pub fn parse_session_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::try_parse(raw)
        .ok()
        .filter(|id| id.hyphenated().to_string() == raw)
        .ok_or_else(|| DomainError::SessionNotFound(raw.to_owned()))
}
