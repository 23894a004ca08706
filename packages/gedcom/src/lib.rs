//! GEDCOM Ahnentafel - Parse GEDCOM genealogy files and number ancestors.
//!
//! This crate reads GEDCOM text into a graph of individuals and families and
//! assigns Ahnentafel numbers (root 1, father `2n`, mother `2n + 1`) from a
//! chosen root individual.
//!
//! # Example
//!
//! ```
//! use gedcom_ahnentafel::{numbering, GedcomParser};
//!
//! let content = "0 HEAD
//! 0 @I1@ INDI
//! 1 NAME Junior /Smith/
//! 0 @I2@ INDI
//! 1 NAME John /Smith/
//! 1 BIRT
//! 2 DATE 1 JAN 1950
//! 0 @F1@ FAM
//! 1 HUSB @I2@
//! 1 CHIL @I1@
//! 0 TRLR";
//!
//! let mut graph = GedcomParser::new().parse(content).unwrap();
//! numbering::assign_ancestor_numbers(&mut graph.individuals, Some("@I1@"));
//!
//! let father = &graph.individuals["@I2@"];
//! assert_eq!(father.ancestor_number, Some(2));
//! assert_eq!(father.to_string(), "John Smith (01-01-1950 - )");
//! ```
//!
//! # Architecture
//!
//! - [`structure`]: line tokenization and `0 HEAD` / `0 TRLR` framing checks
//! - [`parser`]: record parser building individuals and families
//! - [`date`]: GEDCOM date sub-grammar
//! - [`numbering`]: Ahnentafel ancestor numbering
//! - [`completeness`]: completion level of an individual
//! - [`types`]: core data types (Individual, Family, ParsedGedcom)
//! - [`config`]: constants and input validation
//! - [`error`]: error types and Result alias
//! - [`yaml`]: YAML dump of a parsed graph
//! - [`cli`]: command-line interface

pub mod cli;
pub mod completeness;
pub mod config;
pub mod date;
pub mod error;
pub mod numbering;
pub mod parser;
pub mod structure;
pub mod types;
pub mod yaml;

// Re-export main entry points
pub use numbering::{assign_ancestor_numbers, assign_ancestor_numbers_from};
pub use parser::GedcomParser;

// Re-export commonly used items
pub use completeness::CompletionStatus;
pub use date::GedcomDate;
pub use error::{GedcomError, Result, StructuralError};
pub use types::{EventKind, Family, FamilyMap, Individual, IndividualMap, LifeEvent, ParsedGedcom};
