//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{GedcomError, Result};

/// Line every document must open with (compared case-insensitively).
pub const HEADER_RECORD: &str = "0 HEAD";

/// Prefix of the line every document must close with (compared case-insensitively).
pub const TRAILER_PREFIX: &str = "0 TRLR";

/// Ancestor number given to the root individual unless the caller picks another.
pub const DEFAULT_START_NUMBER: u64 = 1;

/// Record pointer pattern: `@`, one or more non-`@`, non-space characters, `@`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static POINTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[^@\s]+@$").expect("valid regex"));

/// Validate record pointer format.
///
/// # Arguments
/// * `pointer` - The record pointer to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(GedcomError::InvalidPointer)` if invalid
///
/// # Examples
/// ```
/// use gedcom_ahnentafel::config::validate_pointer;
///
/// assert!(validate_pointer("@I1@").is_ok());
/// assert!(validate_pointer("I1").is_err());
/// ```
pub fn validate_pointer(pointer: &str) -> Result<()> {
    if POINTER_PATTERN.is_match(pointer) {
        Ok(())
    } else {
        Err(GedcomError::InvalidPointer(pointer.to_string()))
    }
}

/// Validate a start number for ancestor numbering.
///
/// # Examples
/// ```
/// use gedcom_ahnentafel::config::validate_start_number;
///
/// assert!(validate_start_number(7).is_ok());
/// assert!(validate_start_number(0).is_err());
/// ```
pub fn validate_start_number(start: u64) -> Result<()> {
    if start >= 1 {
        Ok(())
    } else {
        Err(GedcomError::InvalidStartNumber(start))
    }
}
