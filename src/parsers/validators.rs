//! Per-field validation for message blocks.
//!
//! Lengths are counted in UTF-16 code units so the 1000-unit limit matches the
//! files produced by existing tooling.

use chrono::NaiveDateTime;
use tracing::debug;
use unicode_normalization::{UnicodeNormalization, is_nfc};

use super::error::{Field, ValidationError};
use super::options::{NicknamePolicy, ParseOptions, TimestampPolicy};

/// Maximum allowed length for any field, in UTF-16 code units
pub const MAX_FIELD_LENGTH: usize = 1000;

/// Stand-in nickname used by [`NicknamePolicy::Lenient`]
pub const LENIENT_NICKNAME: &str = "...";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// `d` marks an ASCII digit, everything else must match literally
const TIMESTAMP_SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd";

const MAX_FRACTION_DIGITS: usize = 9;

/// Length of `value` in UTF-16 code units
pub fn code_unit_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Strips leading and trailing characters up to and including U+0020 (space and ASCII controls)
pub fn trim_ascii_control(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Space, tab, line feed, vertical tab, form feed or carriage return
fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn check_length(value: &str, field: Field) -> Result<(), ValidationError> {
    // Every char is at least one code unit, so short strings skip the count
    if value.len() <= MAX_FIELD_LENGTH {
        return Ok(());
    }
    let length = code_unit_len(value);
    if length > MAX_FIELD_LENGTH {
        return Err(ValidationError::ContentTooLong { field, length });
    }
    Ok(())
}

/// Validates a timestamp and returns it unchanged.
///
/// # Errors
///
/// - [`ValidationError::ContentTooLong`] over 1000 code units
/// - [`ValidationError::MalformedTimestamp`] if empty or not accepted by the policy
pub fn validate_timestamp(
    timestamp: &str,
    options: &ParseOptions,
) -> Result<String, ValidationError> {
    check_length(timestamp, Field::Timestamp)?;

    let accepted = match options.timestamp_policy {
        TimestampPolicy::Strict => is_iso_local_date_time(timestamp),
        TimestampPolicy::AnyNonEmpty => !trim_ascii_control(timestamp).is_empty(),
    };

    if !accepted {
        return Err(ValidationError::MalformedTimestamp { raw: timestamp.to_string() });
    }
    Ok(timestamp.to_string())
}

/// `YYYY-MM-DDTHH:MM:SS` with an optional `.fraction`, checked for calendar validity
fn is_iso_local_date_time(value: &str) -> bool {
    let (date_time, fraction) = match value.split_once('.') {
        Some((date_time, fraction)) => (date_time, Some(fraction)),
        None => (value, None),
    };

    if let Some(fraction) = fraction
        && (fraction.is_empty()
            || fraction.len() > MAX_FRACTION_DIGITS
            || !fraction.bytes().all(|b| b.is_ascii_digit()))
    {
        return false;
    }

    let shape_matches = date_time.len() == TIMESTAMP_SHAPE.len()
        && date_time
            .bytes()
            .zip(TIMESTAMP_SHAPE)
            .all(|(b, &expected)| if expected == b'd' { b.is_ascii_digit() } else { b == expected });
    if !shape_matches {
        return false;
    }

    // chrono accepts 60 as a leap second; local date-times do not
    if &date_time[17..] > "59" {
        return false;
    }

    NaiveDateTime::parse_from_str(date_time, TIMESTAMP_FORMAT).is_ok()
}

fn is_nickname_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Validates a nickname against the `[A-Za-z0-9._-]` charset.
///
/// Under [`NicknamePolicy::Lenient`] a charset violation yields
/// [`LENIENT_NICKNAME`] instead of an error.
///
/// # Errors
///
/// - [`ValidationError::ContentTooLong`] over 1000 code units
/// - [`ValidationError::EmptyNickname`] if empty or only ASCII whitespace
/// - [`ValidationError::InvalidNicknameCharset`] on the first character outside the charset
pub fn validate_nickname(
    nickname: &str,
    options: &ParseOptions,
) -> Result<String, ValidationError> {
    check_length(nickname, Field::Nickname)?;

    if nickname.chars().all(is_ascii_space) {
        return Err(ValidationError::EmptyNickname);
    }

    let Some(invalid) = nickname.chars().find(|c| !is_nickname_char(*c)) else {
        return Ok(nickname.to_string());
    };

    match options.nickname_policy {
        NicknamePolicy::Strict => Err(ValidationError::InvalidNicknameCharset {
            nickname: nickname.to_string(),
            invalid,
        }),
        NicknamePolicy::Lenient => {
            debug!(nickname, ?invalid, "validate.nickname_replaced");
            Ok(LENIENT_NICKNAME.to_string())
        }
    }
}

/// Validates message content and returns it in NFC form.
///
/// The empty string is valid. Content is not trimmed.
///
/// # Errors
///
/// - [`ValidationError::ContentTooLong`] over 1000 code units
/// - [`ValidationError::WhitespaceOnlyContent`] if non-empty and all ASCII whitespace
/// - [`ValidationError::EncodingError`] if the normalized text does not survive a UTF-8 round trip
pub fn validate_content(content: &str) -> Result<String, ValidationError> {
    check_length(content, Field::Content)?;

    if !content.is_empty() && content.chars().all(is_ascii_space) {
        return Err(ValidationError::WhitespaceOnlyContent);
    }

    let normalized = normalize_nfc(content);
    verify_utf8_round_trip(&normalized)?;
    Ok(normalized)
}

/// Canonical composition (NFC)
pub fn normalize_nfc(value: &str) -> String {
    if is_nfc(value) { value.to_string() } else { value.nfc().collect() }
}

fn verify_utf8_round_trip(value: &str) -> Result<(), ValidationError> {
    match String::from_utf8(value.as_bytes().to_vec()) {
        Ok(decoded) if decoded == value => Ok(()),
        _ => Err(ValidationError::EncodingError),
    }
}
