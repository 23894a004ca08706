//! Command-line interface.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::completeness::CompletionStatus;
use crate::config::{validate_pointer, validate_start_number, DEFAULT_START_NUMBER};
use crate::error::{GedcomError, Result};
use crate::numbering::{assign_ancestor_numbers_from, generation, numbered_ancestors};
use crate::parser::GedcomParser;
use crate::types::ParsedGedcom;
use crate::yaml::{generate_yaml, save_yaml};

/// GEDCOM Ahnentafel - Parse GEDCOM files and number ancestors.
#[derive(Parser)]
#[command(name = "gedcom-ahnentafel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show record counts and completeness of a GEDCOM file.
    Summary {
        /// GEDCOM file to read
        file: PathBuf,
    },

    /// List the numbered ancestors of a root individual.
    Ancestors {
        /// GEDCOM file to read
        file: PathBuf,

        /// Record pointer of the root individual (e.g., @I1@)
        #[arg(short, long)]
        root: String,

        /// Ancestor number given to the root
        #[arg(short, long, default_value_t = DEFAULT_START_NUMBER)]
        start: u64,
    },

    /// Write the parsed records as YAML.
    Dump {
        /// GEDCOM file to read
        file: PathBuf,

        /// Number ancestors from this individual before dumping
        #[arg(short, long)]
        root: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { file } => summary_command(&file),
        Commands::Ancestors { file, root, start } => ancestors_command(&file, &root, start),
        Commands::Dump { file, root, output } => {
            dump_command(&file, root.as_deref(), output.as_deref())
        }
    }
}

/// Read and parse a GEDCOM file.
///
/// Bytes that are not valid UTF-8 (ANSEL or Latin-1 exports) are replaced
/// rather than failing the whole file.
fn load(file: &Path) -> Result<ParsedGedcom> {
    let bytes = fs::read(file)?;
    let content = String::from_utf8_lossy(&bytes);
    if matches!(content, Cow::Owned(_)) {
        tracing::warn!(path = %file.display(), "File is not valid UTF-8; invalid bytes replaced");
    }
    GedcomParser::new().parse(&content)
}

fn summary_command(file: &Path) -> Result<()> {
    let graph = load(file)?;

    println!("{} {}", style("Parsed").bold(), style(file.display()).cyan());
    println!("  Individuals: {}", style(graph.individuals.len()).green());
    println!("  Families: {}", style(graph.families.len()).green());
    println!();
    println!("{}", style("Completeness").bold());
    for status in CompletionStatus::ALL {
        let count = graph
            .individuals
            .values()
            .filter(|individual| individual.completion_status() == status)
            .count();
        println!("  {status}: {count}");
    }

    Ok(())
}

fn ancestors_command(file: &Path, root: &str, start: u64) -> Result<()> {
    validate_pointer(root)?;
    validate_start_number(start)?;

    let mut graph = load(file)?;
    let Some(proband) = graph.individual(root) else {
        return Err(GedcomError::IndividualNotFound(root.to_string()));
    };
    println!(
        "{} {} ({})",
        style("Ancestors of").bold(),
        style(proband.full_name()).green(),
        style(root).cyan()
    );
    println!();

    assign_ancestor_numbers_from(&mut graph.individuals, Some(root), start);
    for ancestor in numbered_ancestors(&graph.individuals) {
        let Some(number) = ancestor.ancestor_number else {
            continue;
        };
        println!(
            "{:>6}  {}  {:<8} {}",
            style(number).bold(),
            style(format!("gen {}", generation(number).unwrap_or_default())).dim(),
            ancestor.id(),
            ancestor
        );
    }

    Ok(())
}

fn dump_command(file: &Path, root: Option<&str>, output: Option<&Path>) -> Result<()> {
    if let Some(root) = root {
        validate_pointer(root)?;
    }

    let mut graph = load(file)?;
    if let Some(root) = root {
        if graph.individual(root).is_none() {
            return Err(GedcomError::IndividualNotFound(root.to_string()));
        }
        assign_ancestor_numbers_from(&mut graph.individuals, Some(root), DEFAULT_START_NUMBER);
    }

    match output {
        Some(path) => {
            save_yaml(&graph, root, path)?;
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", generate_yaml(&graph, root)?),
    }

    Ok(())
}
