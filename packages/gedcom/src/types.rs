//! Core data types: individuals, families and the parsed entity graph.
//!
//! Relationships are stored as record pointers and resolved by lookup in the
//! graph's individual map, so no entity owns another.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::date::GedcomDate;

/// Individuals keyed by record pointer, in document order.
pub type IndividualMap = IndexMap<String, Individual>;

/// Families keyed by record pointer, in document order.
pub type FamilyMap = IndexMap<String, Family>;

/// A birth or death event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LifeEvent {
    /// Date of the event, if a parseable `DATE` line was seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<GedcomDate>,

    /// Place of the event, from `PLAC` (or `AGNC` when no `PLAC` is given).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl LifeEvent {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.place.is_none()
    }
}

/// Which life event a nested `DATE`/`PLAC`/`AGNC` line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Birth,
    Death,
}

impl EventKind {
    /// Map a level-1 tag to an event kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BIRT" => Some(Self::Birth),
            "DEAT" => Some(Self::Death),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Birth => "BIRT",
            Self::Death => "DEAT",
        }
    }
}

/// A person (`INDI` record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Individual {
    id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    surname: Option<String>,

    #[serde(skip_serializing_if = "LifeEvent::is_empty")]
    pub birth: LifeEvent,

    #[serde(skip_serializing_if = "LifeEvent::is_empty")]
    pub death: LifeEvent,

    /// Pointer to the father, set by family linking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,

    /// Pointer to the mother, set by family linking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<String>,

    /// Ahnentafel number; `None` means "not a direct ancestor of the root".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestor_number: Option<u64>,

    /// Every tag the parser does not model, keyed by dotted path (`BIRT.SOUR`).
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    raw: IndexMap<String, Vec<String>>,
}

impl Individual {
    /// Create an individual with only its record pointer.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            given_name: None,
            surname: None,
            birth: LifeEvent::default(),
            death: LifeEvent::default(),
            father_id: None,
            mother_id: None,
            ancestor_number: None,
            raw: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    /// Replace both name parts.
    pub fn set_name(&mut self, given_name: impl Into<String>, surname: impl Into<String>) {
        self.given_name = Some(given_name.into());
        self.surname = Some(surname.into());
    }

    /// Given name and surname joined by a space; empty when unnamed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.given_name.as_deref().unwrap_or_default(),
            self.surname.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    pub fn event_mut(&mut self, kind: EventKind) -> &mut LifeEvent {
        match kind {
            EventKind::Birth => &mut self.birth,
            EventKind::Death => &mut self.death,
        }
    }

    /// Append a value under a raw tag path.
    pub fn add_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.raw.entry(key.into()).or_default().push(value.into());
    }

    /// Values captured under a raw tag path, in document order.
    #[must_use]
    pub fn raw_values(&self, key: &str) -> &[String] {
        self.raw.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// All captured raw tags.
    #[must_use]
    pub fn raw_tags(&self) -> &IndexMap<String, Vec<String>> {
        &self.raw
    }

    /// Whether the ancestor numbering reached this individual.
    #[must_use]
    pub fn is_numbered(&self) -> bool {
        self.ancestor_number.is_some()
    }
}

impl fmt::Display for Individual {
    /// `John Smith (01-01-1980 - 31-12-2020)`; the lifespan is omitted when
    /// neither date is known.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())?;
        if self.birth.date.is_some() || self.death.date.is_some() {
            let render = |date: Option<GedcomDate>| date.map(|d| d.to_string()).unwrap_or_default();
            write!(f, " ({} - {})", render(self.birth.date), render(self.death.date))?;
        }
        Ok(())
    }
}

/// A union (`FAM` record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    husband: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    wife: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<String>,
}

impl Family {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            husband: None,
            wife: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn husband(&self) -> Option<&str> {
        self.husband.as_deref()
    }

    #[must_use]
    pub fn wife(&self) -> Option<&str> {
        self.wife.as_deref()
    }

    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn set_husband(&mut self, husband_id: impl Into<String>) {
        self.husband = Some(husband_id.into());
    }

    pub fn set_wife(&mut self, wife_id: impl Into<String>) {
        self.wife = Some(wife_id.into());
    }

    /// Add a child; adding the same child twice has no effect.
    pub fn add_child(&mut self, child_id: impl Into<String>) {
        let child_id = child_id.into();
        if !self.children.contains(&child_id) {
            self.children.push(child_id);
        }
    }

    /// One-line description, e.g.
    /// `Family @F1@: John Smith + Jane Smith, Children: Junior Smith`.
    #[must_use]
    pub fn describe(&self, individuals: &IndividualMap) -> String {
        let name_of = |id: Option<&str>| {
            id.and_then(|id| individuals.get(id))
                .map(Individual::full_name)
                .unwrap_or_default()
        };

        let spouses = format!("{} + {}", name_of(self.husband()), name_of(self.wife()));
        let mut description = format!(
            "Family {}: {}",
            self.id,
            spouses.trim_matches(|c| c == ' ' || c == '+')
        );

        if !self.children.is_empty() {
            let children: Vec<String> = self
                .children
                .iter()
                .map(|id| name_of(Some(id)))
                .collect();
            description.push_str(", Children: ");
            description.push_str(&children.join(", "));
        }

        description
    }
}

/// Entity graph produced by one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedGedcom {
    pub individuals: IndividualMap,
    pub families: FamilyMap,
}

impl ParsedGedcom {
    #[must_use]
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Father and mother of an individual, when linked and present.
    #[must_use]
    pub fn parents_of(&self, id: &str) -> (Option<&Individual>, Option<&Individual>) {
        let Some(individual) = self.individual(id) else {
            return (None, None);
        };
        let lookup = |parent: &Option<String>| parent.as_deref().and_then(|p| self.individual(p));
        (lookup(&individual.father_id), lookup(&individual.mother_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(id: &str, given: &str, surname: &str) -> Individual {
        let mut individual = Individual::new(id);
        individual.set_name(given, surname);
        individual
    }

    #[test]
    fn test_individual_new() {
        let individual = Individual::new("@I123@");
        assert_eq!(individual.id(), "@I123@");
        assert_eq!(individual.full_name(), "");
        assert_eq!(individual.ancestor_number, None);
        assert!(individual.raw_tags().is_empty());
    }

    #[test]
    fn test_set_name_replaces_both_parts() {
        let mut individual = named("@I1@", "John", "Smith");
        assert_eq!(individual.full_name(), "John Smith");

        individual.set_name("Jane", "");
        assert_eq!(individual.given_name(), Some("Jane"));
        assert_eq!(individual.surname(), Some(""));
        assert_eq!(individual.full_name(), "Jane");
    }

    #[test]
    fn test_individual_display_with_lifespan() {
        let mut individual = named("@I123@", "John", "Smith");
        individual.birth.date = GedcomDate::new(1, 1, 1980);
        individual.death.date = GedcomDate::new(31, 12, 2020);
        assert_eq!(individual.to_string(), "John Smith (01-01-1980 - 31-12-2020)");
    }

    #[test]
    fn test_individual_display_partial_lifespan() {
        let mut individual = named("@I1@", "John", "Smith");
        assert_eq!(individual.to_string(), "John Smith");

        individual.birth.date = Some(GedcomDate::approximate(1900));
        assert_eq!(individual.to_string(), "John Smith (Ca 1900 - )");
    }

    #[test]
    fn test_raw_tags_append() {
        let mut individual = Individual::new("@I1@");
        individual.add_raw("BIRT.SOUR", "@S1@");
        individual.add_raw("BIRT.SOUR", "@S2@");
        individual.add_raw("OCCU", "Farmer");

        assert_eq!(individual.raw_values("BIRT.SOUR"), ["@S1@", "@S2@"]);
        assert_eq!(individual.raw_values("OCCU"), ["Farmer"]);
        assert!(individual.raw_values("RESI").is_empty());
    }

    #[test]
    fn test_family_add_child_is_idempotent() {
        let mut family = Family::new("@F1@");
        family.add_child("@I3@");
        family.add_child("@I4@");
        family.add_child("@I3@");
        assert_eq!(family.children(), ["@I3@", "@I4@"]);
    }

    #[test]
    fn test_family_describe() {
        let mut individuals = IndividualMap::new();
        for person in [
            named("@I1@", "John", "Smith"),
            named("@I2@", "Jane", "Smith"),
            named("@I3@", "Junior", "Smith"),
        ] {
            individuals.insert(person.id().to_string(), person);
        }

        let mut family = Family::new("@F1@");
        family.set_husband("@I1@");
        family.set_wife("@I2@");
        assert_eq!(
            family.describe(&individuals),
            "Family @F1@: John Smith + Jane Smith"
        );

        family.add_child("@I3@");
        assert_eq!(
            family.describe(&individuals),
            "Family @F1@: John Smith + Jane Smith, Children: Junior Smith"
        );
    }

    #[test]
    fn test_family_describe_single_parent() {
        let mut individuals = IndividualMap::new();
        individuals.insert("@I2@".to_string(), named("@I2@", "Jane", "Doe"));

        let mut family = Family::new("@F2@");
        family.set_wife("@I2@");
        assert_eq!(family.describe(&individuals), "Family @F2@: Jane Doe");
    }

    #[test]
    fn test_event_kind_from_tag() {
        assert_eq!(EventKind::from_tag("BIRT"), Some(EventKind::Birth));
        assert_eq!(EventKind::from_tag("DEAT"), Some(EventKind::Death));
        assert_eq!(EventKind::from_tag("RESI"), None);
        assert_eq!(EventKind::Death.as_tag(), "DEAT");
    }

    #[test]
    fn test_parsed_gedcom_lookups() {
        let mut child = named("@I3@", "Junior", "Smith");
        child.father_id = Some("@I1@".to_string());
        child.mother_id = Some("@I9@".to_string());

        let mut graph = ParsedGedcom::default();
        for individual in [named("@I1@", "John", "Smith"), child] {
            graph.individuals.insert(individual.id().to_string(), individual);
        }

        assert_eq!(
            graph.individual("@I3@").map(Individual::full_name),
            Some("Junior Smith".to_string())
        );
        assert!(graph.individual("@I2@").is_none());

        // Mother pointer does not resolve to a parsed individual
        let (father, mother) = graph.parents_of("@I3@");
        assert_eq!(father.map(Individual::id), Some("@I1@"));
        assert!(mother.is_none());
        assert_eq!(graph.parents_of("@I404@"), (None, None));
    }

    #[test]
    fn test_individual_serialization_skips_empty_fields() {
        let mut individual = named("@I1@", "John", "Smith");
        individual.birth.place = Some("Copenhagen".to_string());
        let json = serde_json::to_value(&individual).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "@I1@",
                "given_name": "John",
                "surname": "Smith",
                "birth": { "place": "Copenhagen" }
            })
        );
    }
}
