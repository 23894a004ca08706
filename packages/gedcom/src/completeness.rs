//! How completely an individual is documented.
//!
//! Levels build on each other: a level is only reached when every
//! requirement of the levels below it is met as well.

use std::fmt;

use serde::Serialize;

use crate::types::Individual;

/// Raw tag paths that count as a source for a birth or death.
const SOURCE_KEYS: [&str; 2] = ["BIRT.SOUR", "DEAT.SOUR"];

/// Tag marking a residence record; any `RESI.*` sub-tag counts as well.
const RESIDENCE_TAG: &str = "RESI";

/// Completion level of an individual, from 0 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// No name recorded.
    Unnamed = 0,

    /// Name only.
    NameOnly = 1,

    /// Name plus a birth or death date.
    Dated = 2,

    /// Dated, both places known, and a birth or death source cited.
    Sourced = 3,

    /// Sourced plus a residence record.
    Resident = 4,
}

impl CompletionStatus {
    /// All levels, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Unnamed,
        Self::NameOnly,
        Self::Dated,
        Self::Sourced,
        Self::Resident,
    ];

    /// Evaluate an individual.
    #[must_use]
    pub fn of(individual: &Individual) -> Self {
        if individual.full_name().is_empty() {
            return Self::Unnamed;
        }
        if individual.birth.date.is_none() && individual.death.date.is_none() {
            return Self::NameOnly;
        }

        let has_places = individual.birth.place.is_some() && individual.death.place.is_some();
        let has_source = SOURCE_KEYS
            .iter()
            .any(|key| !individual.raw_values(key).is_empty());
        if !(has_places && has_source) {
            return Self::Dated;
        }

        if has_residence(individual) {
            Self::Resident
        } else {
            Self::Sourced
        }
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        *self as u8
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unnamed => "unnamed",
            Self::NameOnly => "name only",
            Self::Dated => "dated",
            Self::Sourced => "sourced",
            Self::Resident => "resident",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level(), self.as_str())
    }
}

fn has_residence(individual: &Individual) -> bool {
    individual.raw_tags().keys().any(|key| {
        key == RESIDENCE_TAG
            || key
                .strip_prefix(RESIDENCE_TAG)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

impl Individual {
    /// Completion level of this individual.
    #[must_use]
    pub fn completion_status(&self) -> CompletionStatus {
        CompletionStatus::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::GedcomDate;

    fn sourced() -> Individual {
        let mut individual = Individual::new("@I1@");
        individual.set_name("Jane", "Doe");
        individual.birth.date = Some(GedcomDate::year_only(1950));
        individual.birth.place = Some("Copenhagen".to_string());
        individual.death.place = Some("Aarhus".to_string());
        individual.add_raw("BIRT.SOUR", "@S1@");
        individual
    }

    #[test]
    fn test_no_name_is_unnamed() {
        let mut individual = Individual::new("@I1@");
        individual.birth.date = Some(GedcomDate::year_only(1900));
        assert_eq!(individual.completion_status(), CompletionStatus::Unnamed);
    }

    #[test]
    fn test_name_only() {
        let mut individual = Individual::new("@I1@");
        individual.set_name("John", "");
        assert_eq!(individual.completion_status(), CompletionStatus::NameOnly);
    }

    #[test]
    fn test_name_and_date() {
        let mut individual = Individual::new("@I1@");
        individual.set_name("John", "Doe");
        individual.death.date = Some(GedcomDate::year_only(1990));
        assert_eq!(individual.completion_status(), CompletionStatus::Dated);
    }

    #[test]
    fn test_sourced_requires_places_and_source() {
        assert_eq!(sourced().completion_status(), CompletionStatus::Sourced);

        let mut no_death_place = sourced();
        no_death_place.death.place = None;
        assert_eq!(no_death_place.completion_status(), CompletionStatus::Dated);

        let mut other_source = Individual::new("@I2@");
        other_source.set_name("Jane", "Doe");
        other_source.birth.date = Some(GedcomDate::year_only(1950));
        other_source.birth.place = Some("Copenhagen".to_string());
        other_source.death.place = Some("Aarhus".to_string());
        other_source.add_raw("NAME.SOUR", "@S1@");
        assert_eq!(other_source.completion_status(), CompletionStatus::Dated);
    }

    #[test]
    fn test_death_source_counts() {
        let mut death_sourced = Individual::new("@I3@");
        death_sourced.set_name("Jane", "Doe");
        death_sourced.death.date = GedcomDate::new(2, 2, 2000);
        death_sourced.birth.place = Some("Copenhagen".to_string());
        death_sourced.death.place = Some("Aarhus".to_string());
        death_sourced.add_raw("DEAT.SOUR", "@S2@");
        assert_eq!(death_sourced.completion_status(), CompletionStatus::Sourced);
    }

    #[test]
    fn test_residence_on_subtag() {
        let mut individual = sourced();
        individual.add_raw("RESI.PLAC", "Odense");
        assert_eq!(individual.completion_status(), CompletionStatus::Resident);
    }

    #[test]
    fn test_residence_bare_tag() {
        let mut individual = sourced();
        individual.add_raw("RESI", "");
        assert_eq!(individual.completion_status(), CompletionStatus::Resident);

        let mut lookalike = sourced();
        lookalike.add_raw("RESIDENCE", "");
        assert_eq!(lookalike.completion_status(), CompletionStatus::Sourced);
    }

    #[test]
    fn test_residence_without_source_is_not_enough() {
        let mut individual = Individual::new("@I1@");
        individual.set_name("Jane", "Doe");
        individual.birth.date = Some(GedcomDate::year_only(1950));
        individual.add_raw("RESI.PLAC", "Odense");
        assert_eq!(individual.completion_status(), CompletionStatus::Dated);
    }

    #[test]
    fn test_level_and_display() {
        assert_eq!(CompletionStatus::Unnamed.level(), 0);
        assert_eq!(CompletionStatus::Resident.level(), 4);
        assert_eq!(CompletionStatus::Dated.to_string(), "2 (dated)");
        assert!(CompletionStatus::Sourced > CompletionStatus::Dated);
    }
}
