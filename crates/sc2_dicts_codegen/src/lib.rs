//! Code generation for sc2_dicts.
//!
//! This crate reads the `UnitTypeId`, `AbilityId` and `UpgradeId` enum
//! sources, cross-references them with the python-sc2 dict snapshots and
//! generates static lookup tables for the id enums.
//!
//! The pipeline is strictly one way: [`enums::extract`] and the
//! [`dataset`] loaders feed the [`resolve::Resolver`], whose tables are
//! rendered by [`research::render`] and [`unit_abilities::render`].

pub mod dataset;
pub mod emit;
pub mod enums;
pub mod error;
pub mod models;
pub mod research;
pub mod resolve;
pub mod unit_abilities;

pub use dataset::{DatasetSource, FileSource};
pub use emit::write_artifact;
pub use enums::{extract, EnumKind, EnumerationTable, IdTables};
pub use error::{CodegenError, Result};
pub use resolve::{Diagnostic, Diagnostics, DuplicatePolicy, Resolver};

use std::fmt;
use std::path::Path;

/// The artifacts this crate can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `research_abilities.rs` from `RESEARCH_INFO`
    ResearchAbilities,
    /// `unit_abilities.rs` from `UNIT_ABILITIES`
    UnitAbilities,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::ResearchAbilities, Target::UnitAbilities];

    pub const fn file_name(self) -> &'static str {
        match self {
            Target::ResearchAbilities => "research_abilities.rs",
            Target::UnitAbilities => "unit_abilities.rs",
        }
    }

    /// Snapshot file name inside a data directory
    pub const fn dataset_file(self) -> &'static str {
        match self {
            Target::ResearchAbilities => "research_abilities.json",
            Target::UnitAbilities => "unit_abilities.json",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Knobs for a generator run.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Conflict handling for the research table
    pub on_duplicate: DuplicatePolicy,
    /// Module path the artifacts import the id enums from
    pub ids_module: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            on_duplicate: DuplicatePolicy::default(),
            ids_module: "crate::ids".to_string(),
        }
    }
}

/// A rendered artifact and what it took to produce it.
#[derive(Debug)]
pub struct Generated {
    pub target: Target,
    pub text: String,
    /// Number of table entries emitted
    pub entries: usize,
    pub diagnostics: Diagnostics,
}

/// Run the pipeline for one target on already fetched dataset text.
///
/// Nothing is written; fatal errors surface before any text exists.
pub fn generate(
    target: Target,
    tables: &IdTables,
    dataset_text: &str,
    options: &GenerateOptions,
) -> Result<Generated> {
    let mut resolver = Resolver::new(tables);

    let (text, entries) = match target {
        Target::ResearchAbilities => {
            let dataset = dataset::load_research_info(dataset_text)?;
            let table = research::build(&dataset, &mut resolver, options.on_duplicate)?;
            (research::render(&table, &options.ids_module), table.len())
        }
        Target::UnitAbilities => {
            let dataset = dataset::load_unit_abilities(dataset_text)?;
            let table = unit_abilities::build(&dataset, &mut resolver);
            (unit_abilities::render(&table, &options.ids_module), table.len())
        }
    };

    Ok(Generated {
        target,
        text,
        entries,
        diagnostics: resolver.into_diagnostics(),
    })
}

/// Fetch the dataset from `source` and run [`generate`].
pub fn generate_from(
    target: Target,
    tables: &IdTables,
    source: &dyn DatasetSource,
    options: &GenerateOptions,
) -> Result<Generated> {
    tracing::info!(%target, source = %source.describe(), "loading dataset");
    let text = source.fetch()?;
    generate(target, tables, &text, options)
}

/// Generate every artifact into `out_dir`.
///
/// This is the entry point called from sc2_dicts' build.rs. Ids come from
/// `ids_dir`, datasets from the snapshots in `data_dir`.
pub fn generate_all(out_dir: &Path, ids_dir: &Path, data_dir: &Path) -> Result<Vec<Generated>> {
    // Rerun if any input changes
    for path in IdTables::source_paths(ids_dir) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    for target in Target::ALL {
        println!(
            "cargo:rerun-if-changed={}",
            data_dir.join(target.dataset_file()).display()
        );
    }

    let tables = IdTables::from_dir(ids_dir)?;
    let options = GenerateOptions::default();

    // Render everything first so a failure leaves no partial output
    let generated = Target::ALL
        .iter()
        .map(|&target| {
            let source = FileSource::new(data_dir.join(target.dataset_file()));
            generate_from(target, &tables, &source, &options)
        })
        .collect::<Result<Vec<_>>>()?;

    for artifact in &generated {
        write_artifact(&out_dir.join(artifact.target.file_name()), &artifact.text)?;
    }
    Ok(generated)
}
