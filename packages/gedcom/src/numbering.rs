//! Ahnentafel ancestor numbering.
//!
//! The root individual gets the start number `n`; a person's father gets
//! `2n` and their mother `2n + 1`. Individuals not reached from the root keep
//! `ancestor_number == None`.

use crate::config::DEFAULT_START_NUMBER;
use crate::types::{Individual, IndividualMap};

/// Number of the father of the ancestor numbered `number`.
#[must_use]
pub fn father_number(number: u64) -> Option<u64> {
    number.checked_mul(2)
}

/// Number of the mother of the ancestor numbered `number`.
#[must_use]
pub fn mother_number(number: u64) -> Option<u64> {
    father_number(number)?.checked_add(1)
}

/// Number of the child through whom ancestor `number` descends to the root.
///
/// # Examples
/// ```
/// use gedcom_ahnentafel::numbering::child_number;
///
/// assert_eq!(child_number(6), Some(3));
/// assert_eq!(child_number(7), Some(3));
/// assert_eq!(child_number(1), None);
/// ```
#[must_use]
pub fn child_number(number: u64) -> Option<u64> {
    (number >= 2).then_some(number / 2)
}

/// Generation of an ancestor number: 0 for 1, 1 for parents, 2 for grandparents.
#[must_use]
pub fn generation(number: u64) -> Option<u32> {
    number.checked_ilog2()
}

/// Number the ancestors of `root_id`, starting at 1.
///
/// See [`assign_ancestor_numbers_from`].
pub fn assign_ancestor_numbers(individuals: &mut IndividualMap, root_id: Option<&str>) -> usize {
    assign_ancestor_numbers_from(individuals, root_id, DEFAULT_START_NUMBER)
}

/// Number the ancestors of `root_id`, giving the root `start`.
///
/// Every individual is reset to unassigned first, so repeated runs over the
/// same graph give the same result. Nothing further happens when `root_id` is
/// `None`, unknown, or `start` is 0.
///
/// The walk is depth-first with the father's line before the mother's. An
/// individual that already has a number is not visited again: with pedigree
/// collapse the first path keeps its number, and a person who is their own
/// ancestor ends the walk on that branch.
///
/// # Returns
/// The number of individuals that received a number.
///
/// # Examples
/// ```
/// use gedcom_ahnentafel::{numbering, GedcomParser};
///
/// let mut graph = GedcomParser::new()
///     .parse("0 HEAD\n0 @I1@ INDI\n0 @I2@ INDI\n0 @F1@ FAM\n1 WIFE @I2@\n1 CHIL @I1@\n0 TRLR")
///     .unwrap();
/// numbering::assign_ancestor_numbers(&mut graph.individuals, Some("@I1@"));
/// assert_eq!(graph.individuals["@I2@"].ancestor_number, Some(3));
/// ```
pub fn assign_ancestor_numbers_from(
    individuals: &mut IndividualMap,
    root_id: Option<&str>,
    start: u64,
) -> usize {
    for individual in individuals.values_mut() {
        individual.ancestor_number = None;
    }

    let Some(root_id) = root_id else {
        tracing::debug!("No root individual given; numbering skipped");
        return 0;
    };
    if !individuals.contains_key(root_id) {
        tracing::debug!(root = %root_id, "Root individual not found; numbering skipped");
        return 0;
    }
    if start == 0 {
        tracing::warn!(root = %root_id, "Ancestor numbers start at 1; numbering skipped");
        return 0;
    }

    let mut assigned = 0;
    let mut pending: Vec<(String, u64)> = vec![(root_id.to_string(), start)];

    while let Some((id, number)) = pending.pop() {
        let Some(individual) = individuals.get_mut(&id) else {
            continue;
        };
        if individual.is_numbered() {
            continue;
        }
        individual.ancestor_number = Some(number);
        assigned += 1;

        // Pushed mother first so the father's line is walked first
        let parents = [
            (individual.mother_id.clone(), mother_number(number)),
            (individual.father_id.clone(), father_number(number)),
        ];
        for (parent_id, parent_number) in parents {
            let Some(parent_id) = parent_id else {
                continue;
            };
            match parent_number {
                Some(parent_number) => pending.push((parent_id, parent_number)),
                None => {
                    tracing::warn!(id = %parent_id, child = number, "Ancestor number overflows; branch not numbered");
                }
            }
        }
    }

    tracing::info!(root = %root_id, start, assigned, "Assigned ancestor numbers");
    assigned
}

/// Individual holding ancestor number `number`, if any.
#[must_use]
pub fn ancestor_by_number(individuals: &IndividualMap, number: u64) -> Option<&Individual> {
    individuals
        .values()
        .find(|individual| individual.ancestor_number == Some(number))
}

/// All numbered individuals, lowest number first.
#[must_use]
pub fn numbered_ancestors(individuals: &IndividualMap) -> Vec<&Individual> {
    let mut ancestors: Vec<&Individual> = individuals
        .values()
        .filter(|individual| individual.is_numbered())
        .collect();
    ancestors.sort_by_key(|individual| individual.ancestor_number);
    ancestors
}
