//! Line tokenization and document framing checks.

use crate::config::{HEADER_RECORD, TRAILER_PREFIX};
use crate::error::StructuralError;

/// Split content into trimmed, non-empty lines.
///
/// Accepts `\r\n`, `\r` and `\n` line endings, mixed freely.
#[must_use]
pub fn tokenize(content: &str) -> Vec<&str> {
    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Check that tokenized lines are framed by `0 HEAD` and `0 TRLR`.
///
/// # Returns
/// * `Ok(())` if the framing is valid
/// * `Err(StructuralError)` naming the first rule that failed
pub fn validate(lines: &[&str]) -> Result<(), StructuralError> {
    let Some(first) = lines.first() else {
        return Err(StructuralError::EmptyContent);
    };

    if !first.eq_ignore_ascii_case(HEADER_RECORD) {
        return Err(StructuralError::MissingHeader);
    }

    if lines.len() < 2 {
        return Err(StructuralError::MissingTrailer);
    }

    let last = lines
        .iter()
        .rev()
        .find(|line| !line.trim().is_empty())
        .ok_or(StructuralError::MissingTrailer)?;
    if !starts_with_ignore_case(last, TRAILER_PREFIX) {
        return Err(StructuralError::MissingTrailer);
    }

    Ok(())
}

/// Tokenize and validate in one step.
///
/// # Examples
/// ```
/// use gedcom_ahnentafel::structure::normalize;
/// use gedcom_ahnentafel::StructuralError;
///
/// let lines = normalize("0 HEAD\r\n0 @I1@ INDI\r0 TRLR\n\n").unwrap();
/// assert_eq!(lines, ["0 HEAD", "0 @I1@ INDI", "0 TRLR"]);
///
/// assert_eq!(normalize("0 @I1@ INDI\n0 TRLR"), Err(StructuralError::MissingHeader));
/// ```
pub fn normalize(content: &str) -> Result<Vec<&str>, StructuralError> {
    let lines = tokenize(content);
    validate(&lines)?;
    Ok(lines)
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_mixed_line_endings() {
        let lines = tokenize("0 HEAD\r\n1 CHAR UTF-8\r0 @I1@ INDI\n  1 NAME John /Smith/  \n\n\t\n0 TRLR");
        assert_eq!(
            lines,
            vec![
                "0 HEAD",
                "1 CHAR UTF-8",
                "0 @I1@ INDI",
                "1 NAME John /Smith/",
                "0 TRLR"
            ]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\r\n  \n\t").is_empty());
    }

    #[test]
    fn test_validate_empty_content() {
        assert_eq!(validate(&[]), Err(StructuralError::EmptyContent));
        assert_eq!(normalize(""), Err(StructuralError::EmptyContent));
    }

    #[test]
    fn test_validate_missing_header() {
        assert_eq!(
            normalize("This is not a GEDCOM file"),
            Err(StructuralError::MissingHeader)
        );
        assert_eq!(
            normalize("0 @I1@ INDI\n1 NAME John /Smith/\n0 TRLR"),
            Err(StructuralError::MissingHeader)
        );
        assert_eq!(
            normalize("0 HEADER\n0 TRLR"),
            Err(StructuralError::MissingHeader)
        );
    }

    #[test]
    fn test_validate_missing_trailer() {
        assert_eq!(
            normalize("0 HEAD\n1 GEDC\n2 VERS 5.5.5\n0 @I1@ INDI\n1 NAME John /Smith/"),
            Err(StructuralError::MissingTrailer)
        );
        assert_eq!(normalize("0 HEAD"), Err(StructuralError::MissingTrailer));
    }

    #[test]
    fn test_validate_is_case_insensitive() {
        assert!(normalize("0 head\n0 trlr").is_ok());
        assert!(normalize("0 HEAD\n0 Trlr  \n \n").is_ok());
    }

    #[test]
    fn test_validate_trailer_prefix() {
        // Anything may follow the trailer tag on the same line
        assert!(normalize("0 HEAD\n0 TRLR extra").is_ok());
        assert_eq!(
            normalize("0 HEAD\n0 TRL"),
            Err(StructuralError::MissingTrailer)
        );
    }
}
