//! YAML dump of a parsed entity graph.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::completeness::CompletionStatus;
use crate::error::Result;
use crate::types::{Family, Individual, ParsedGedcom};

/// Individual with derived fields for YAML output.
#[derive(Debug, Serialize)]
struct YamlIndividual<'a> {
    #[serde(flatten)]
    individual: &'a Individual,
    full_name: String,
    completion: CompletionStatus,
}

impl<'a> From<&'a Individual> for YamlIndividual<'a> {
    fn from(individual: &'a Individual) -> Self {
        Self {
            individual,
            full_name: individual.full_name(),
            completion: individual.completion_status(),
        }
    }
}

/// Whole graph for YAML output.
#[derive(Debug, Serialize)]
struct YamlGraph<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<&'a str>,
    individuals: Vec<YamlIndividual<'a>>,
    families: Vec<&'a Family>,
}

/// Serialize the graph to YAML, individuals and families in document order.
///
/// # Arguments
/// * `graph` - Parsed entity graph (numbered or not)
/// * `root` - Root pointer the numbering was run from, recorded for reference
pub fn generate_yaml(graph: &ParsedGedcom, root: Option<&str>) -> Result<String> {
    let document = YamlGraph {
        root,
        individuals: graph.individuals.values().map(YamlIndividual::from).collect(),
        families: graph.families.values().collect(),
    };
    Ok(serde_yaml_ng::to_string(&document)?)
}

/// Write the YAML dump to `path`.
pub fn save_yaml(graph: &ParsedGedcom, root: Option<&str>, path: &Path) -> Result<()> {
    let yaml = generate_yaml(graph, root)?;
    fs::write(path, yaml)?;
    tracing::debug!(path = %path.display(), "Wrote YAML dump");
    Ok(())
}
