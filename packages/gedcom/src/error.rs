//! Error types for GEDCOM parsing and ancestor numbering.
//!
//! Uses the dual-error pattern: `GedcomError` for library consumers, and
//! `StructuralError` naming which framing rule a document broke.

use thiserror::Error;

/// Reason a document failed structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// No non-blank lines at all.
    #[error("GEDCOM file must contain at least a header and trailer")]
    EmptyContent,

    /// First line is not `0 HEAD`.
    #[error("GEDCOM file must start with '0 HEAD'")]
    MissingHeader,

    /// Last line is not `0 TRLR`, or the header is the only line.
    #[error("GEDCOM file must end with '0 TRLR'")]
    MissingTrailer,
}

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum GedcomError {
    /// No content was handed to the parser.
    #[error("No GEDCOM content provided")]
    MissingInput,

    /// Document framing is broken; the whole parse is aborted.
    #[error("Invalid GEDCOM format: {0}")]
    InvalidFormat(#[from] StructuralError),

    /// Date value does not match any supported form.
    #[error("Invalid GEDCOM date format: '{0}'")]
    InvalidDate(String),

    /// Record pointer is not of the form `@ID@`.
    #[error("Invalid record pointer: '{0}'. Expected @ID@ (e.g., @I1@)")]
    InvalidPointer(String),

    /// No individual with this pointer in the parsed document.
    #[error("Individual not found: {0}")]
    IndividualNotFound(String),

    /// Ancestor numbers start at 1.
    #[error("Invalid start number: {0}. Ancestor numbers start at 1")]
    InvalidStartNumber(u64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for GEDCOM operations.
pub type Result<T> = std::result::Result<T, GedcomError>;
