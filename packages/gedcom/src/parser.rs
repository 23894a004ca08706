//! Record parser: turns GEDCOM lines into individuals and families.
//!
//! The parser walks the normalized lines once, keeping a small context of the
//! record and level-1 tag currently being read, then links children to their
//! parents in a second pass. Malformed lines and unparseable dates are
//! dropped individually; only broken document framing aborts a parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::date::GedcomDate;
use crate::error::{GedcomError, Result};
use crate::structure;
use crate::types::{EventKind, Family, FamilyMap, Individual, IndividualMap, ParsedGedcom};

/// `given/surname/` with both parts non-empty.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<given>[^/]+)/(?P<surname>[^/]+)/").expect("valid regex")
});

/// One `<level> <tag-or-pointer> [value]` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GedcomLine<'a> {
    pub level: u32,
    pub tag: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> GedcomLine<'a> {
    /// Split a line into level, tag and value.
    ///
    /// Returns `None` for lines with fewer than two fields or a level that is
    /// not a non-negative integer.
    ///
    /// # Examples
    /// ```
    /// use gedcom_ahnentafel::parser::GedcomLine;
    ///
    /// let line = GedcomLine::parse("1 NAME John /Smith/").unwrap();
    /// assert_eq!((line.level, line.tag, line.value), (1, "NAME", Some("John /Smith/")));
    ///
    /// assert!(GedcomLine::parse("HEAD").is_none());
    /// assert!(GedcomLine::parse("x NAME John").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let (level, rest) = line.trim().split_once(char::is_whitespace)?;
        let level = level.parse::<u32>().ok()?;

        let rest = rest.trim_start();
        let (tag, value) = match rest.split_once(char::is_whitespace) {
            Some((tag, value)) => (tag, Some(value.trim()).filter(|v| !v.is_empty())),
            None => (rest, None),
        };

        Some(Self { level, tag, value })
    }
}

/// Role an individual plays in a family record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FamilyRole {
    Husband,
    Wife,
    Child,
}

impl FamilyRole {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "HUSB" => Some(Self::Husband),
            "WIFE" => Some(Self::Wife),
            "CHIL" => Some(Self::Child),
            _ => None,
        }
    }
}

/// Record the parser is currently inside.
#[derive(Debug, Default)]
enum RecordContext {
    #[default]
    None,
    Individual(String),
    Family(String),
}

#[derive(Debug, Default)]
struct ParseState {
    record: RecordContext,
    /// Level-1 tag that level-2 lines belong to.
    current_tag: Option<String>,
}

/// Counters reported once a parse completes.
#[derive(Debug, Default)]
struct ParseStats {
    skipped_lines: usize,
    dropped_dates: usize,
    unresolved_members: usize,
}

/// Split a `NAME` value into trimmed given name and surname.
///
/// # Examples
/// ```
/// use gedcom_ahnentafel::parser::split_name;
///
/// assert_eq!(split_name("John /Smith/"), Some(("John".to_string(), "Smith".to_string())));
/// assert_eq!(split_name("Invalid Name Format"), None);
/// ```
#[must_use]
pub fn split_name(value: &str) -> Option<(String, String)> {
    let captures = NAME_PATTERN.captures(value)?;
    let given = captures.name("given")?.as_str().trim();
    let surname = captures.name("surname")?.as_str().trim();
    Some((given.to_string(), surname.to_string()))
}

/// GEDCOM parser.
///
/// Holds the working collections of one parse; each call to [`parse`]
/// clears them and hands the finished graph to the caller.
///
/// [`parse`]: GedcomParser::parse
#[derive(Debug, Default)]
pub struct GedcomParser {
    individuals: IndividualMap,
    families: FamilyMap,
    stats: ParseStats,
}

impl GedcomParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse GEDCOM content into individuals and families.
    ///
    /// # Returns
    /// * `Ok(ParsedGedcom)` with both maps and parent links filled in
    /// * `Err(GedcomError::InvalidFormat)` if the `0 HEAD` / `0 TRLR` framing is broken
    ///
    /// # Examples
    /// ```
    /// use gedcom_ahnentafel::GedcomParser;
    ///
    /// let mut parser = GedcomParser::new();
    /// let graph = parser
    ///     .parse("0 HEAD\n0 @I1@ INDI\n1 NAME John /Smith/\n0 TRLR")
    ///     .unwrap();
    /// assert_eq!(graph.individuals["@I1@"].full_name(), "John Smith");
    /// ```
    pub fn parse(&mut self, content: &str) -> Result<ParsedGedcom> {
        self.individuals.clear();
        self.families.clear();
        self.stats = ParseStats::default();

        let lines = structure::normalize(content)?;
        self.parse_records(&lines);
        self.link_families();

        tracing::info!(
            individuals = self.individuals.len(),
            families = self.families.len(),
            skipped_lines = self.stats.skipped_lines,
            dropped_dates = self.stats.dropped_dates,
            unresolved_members = self.stats.unresolved_members,
            "Parsed GEDCOM document"
        );

        Ok(ParsedGedcom {
            individuals: std::mem::take(&mut self.individuals),
            families: std::mem::take(&mut self.families),
        })
    }

    /// Parse content that may be absent.
    ///
    /// # Returns
    /// * `Err(GedcomError::MissingInput)` when `content` is `None`
    /// * otherwise the result of [`GedcomParser::parse`]
    pub fn parse_optional(&mut self, content: Option<&str>) -> Result<ParsedGedcom> {
        let content = content.ok_or(GedcomError::MissingInput)?;
        self.parse(content)
    }

    fn parse_records(&mut self, lines: &[&str]) {
        let mut state = ParseState::default();

        for (index, raw) in lines.iter().enumerate() {
            let Some(line) = GedcomLine::parse(raw) else {
                tracing::debug!(line = index + 1, content = %raw, "Skipping malformed line");
                self.stats.skipped_lines += 1;
                continue;
            };

            match line.level {
                0 => self.parse_level_zero(&line, &mut state),
                1 => self.parse_level_one(&line, &mut state),
                2 => self.parse_level_two(&line, &state),
                _ => {}
            }
        }
    }

    /// Start a new record; only `INDI` and `FAM` produce entities.
    fn parse_level_zero(&mut self, line: &GedcomLine<'_>, state: &mut ParseState) {
        state.current_tag = None;
        state.record = match line.value {
            Some("INDI") => {
                let id = line.tag.to_string();
                if self
                    .individuals
                    .insert(id.clone(), Individual::new(id.as_str()))
                    .is_some()
                {
                    tracing::debug!(id = %id, "Duplicate individual record replaces earlier one");
                }
                RecordContext::Individual(id)
            }
            Some("FAM") => {
                let id = line.tag.to_string();
                if self
                    .families
                    .insert(id.clone(), Family::new(id.as_str()))
                    .is_some()
                {
                    tracing::debug!(id = %id, "Duplicate family record replaces earlier one");
                }
                RecordContext::Family(id)
            }
            _ => RecordContext::None,
        };
    }

    fn parse_level_one(&mut self, line: &GedcomLine<'_>, state: &mut ParseState) {
        match &state.record {
            RecordContext::Individual(id) => {
                if let Some(individual) = self.individuals.get_mut(id) {
                    apply_individual_tag(individual, line);
                }
                state.current_tag = Some(line.tag.to_string());
            }
            RecordContext::Family(id) => {
                if let (Some(role), Some(pointer)) = (FamilyRole::from_tag(line.tag), line.value) {
                    self.add_family_member(id, role, pointer);
                }
                state.current_tag = None;
            }
            RecordContext::None => state.current_tag = None,
        }
    }

    fn parse_level_two(&mut self, line: &GedcomLine<'_>, state: &ParseState) {
        let (RecordContext::Individual(id), Some(parent_tag)) = (&state.record, &state.current_tag)
        else {
            return;
        };
        let Some(individual) = self.individuals.get_mut(id) else {
            return;
        };

        match (EventKind::from_tag(parent_tag), line.tag, line.value) {
            (Some(kind), "DATE", Some(value)) => match GedcomDate::parse(value) {
                Ok(date) => individual.event_mut(kind).date = Some(date),
                Err(e) => {
                    tracing::debug!(id = %id, event = kind.as_tag(), error = %e, "Dropping unparseable date");
                    self.stats.dropped_dates += 1;
                }
            },
            (Some(kind), "PLAC", Some(value)) => {
                individual.event_mut(kind).place = Some(value.to_string());
            }
            (Some(kind), "AGNC", Some(value)) => {
                let event = individual.event_mut(kind);
                if event.place.is_none() {
                    event.place = Some(value.to_string());
                }
            }
            (Some(_), "DATE" | "PLAC" | "AGNC", None) => {}
            (_, tag, value) => {
                individual.add_raw(format!("{parent_tag}.{tag}"), value.unwrap_or_default());
            }
        }
    }

    /// Attach an already-parsed individual to a family; unknown pointers are ignored.
    fn add_family_member(&mut self, family_id: &str, role: FamilyRole, pointer: &str) {
        if !self.individuals.contains_key(pointer) {
            tracing::debug!(family = %family_id, pointer = %pointer, ?role, "Ignoring unresolved family member");
            self.stats.unresolved_members += 1;
            return;
        }
        let Some(family) = self.families.get_mut(family_id) else {
            return;
        };
        match role {
            FamilyRole::Husband => family.set_husband(pointer),
            FamilyRole::Wife => family.set_wife(pointer),
            FamilyRole::Child => family.add_child(pointer),
        }
    }

    /// Point every child at its family's husband and wife.
    fn link_families(&mut self) {
        for family in self.families.values() {
            for child_id in family.children() {
                let Some(child) = self.individuals.get_mut(child_id) else {
                    continue;
                };
                if let Some(husband) = family.husband() {
                    child.father_id = Some(husband.to_string());
                }
                if let Some(wife) = family.wife() {
                    child.mother_id = Some(wife.to_string());
                }
            }
        }
    }
}

/// Level-1 line inside an `INDI` record.
fn apply_individual_tag(individual: &mut Individual, line: &GedcomLine<'_>) {
    match line.tag {
        "NAME" => match line.value.and_then(split_name) {
            Some((given, surname)) => individual.set_name(given, surname),
            None => {
                tracing::debug!(id = %individual.id(), value = ?line.value, "Ignoring NAME without /surname/");
            }
        },
        // Their DATE/PLAC/AGNC lines are handled at level 2
        "BIRT" | "DEAT" => {}
        tag => individual.add_raw(tag, line.value.unwrap_or_default()),
    }
}
