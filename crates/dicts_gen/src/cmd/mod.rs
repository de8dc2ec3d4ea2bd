pub mod check;
pub mod generate;

use crate::source::open_source;
use crate::utils::find_project_root;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use sc2_dicts_codegen::{
    generate_from, DuplicatePolicy, GenerateOptions, Generated, IdTables, Target,
};
use std::path::PathBuf;
use std::time::Duration;

/// Consumer crate whose ids and snapshots are used by default
const CONSUMER_CRATE: &str = "crates/sc2_dicts";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableArg {
    /// research_abilities.rs
    Research,
    /// unit_abilities.rs
    Units,
    All,
}

impl TableArg {
    pub fn targets(self) -> Vec<Target> {
        match self {
            TableArg::Research => vec![Target::ResearchAbilities],
            TableArg::Units => vec![Target::UnitAbilities],
            TableArg::All => Target::ALL.to_vec(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OnDuplicate {
    #[default]
    LastWins,
    FirstWins,
    Reject,
}

impl From<OnDuplicate> for DuplicatePolicy {
    fn from(arg: OnDuplicate) -> Self {
        match arg {
            OnDuplicate::LastWins => DuplicatePolicy::LastWins,
            OnDuplicate::FirstWins => DuplicatePolicy::FirstWins,
            OnDuplicate::Reject => DuplicatePolicy::Reject,
        }
    }
}

/// Inputs shared by every subcommand.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Which table to process
    #[arg(long, value_enum, default_value_t = TableArg::All)]
    pub table: TableArg,

    /// Directory holding unit_typeid.rs, ability_id.rs and upgrade_id.rs
    #[arg(long, env = "DICTS_GEN_IDS_DIR")]
    pub ids_dir: Option<PathBuf>,

    /// RESEARCH_INFO dataset in its JSON rendition, as a path or an http(s) URL
    ///
    /// The upstream python-sc2 `.py` module is not accepted; see
    /// crates/sc2_dicts/data/README.md for the export.
    #[arg(long, env = "DICTS_GEN_RESEARCH_DATASET")]
    pub research_dataset: Option<String>,

    /// UNIT_ABILITIES dataset in its JSON rendition, as a path or an http(s) URL
    ///
    /// The upstream python-sc2 `.py` module is not accepted; see
    /// crates/sc2_dicts/data/README.md for the export.
    #[arg(long, env = "DICTS_GEN_UNITS_DATASET")]
    pub units_dataset: Option<String>,

    /// Directory the artifacts are written to or checked against
    #[arg(long, env = "DICTS_GEN_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// What to do when one research ability maps to two upgrades
    #[arg(long, value_enum, default_value_t = OnDuplicate::LastWins)]
    pub on_duplicate: OnDuplicate,

    /// Fetch timeout for remote datasets, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl InputArgs {
    pub fn ids_dir(&self) -> Result<PathBuf> {
        match &self.ids_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(find_project_root()?.join(CONSUMER_CRATE).join("src/ids")),
        }
    }

    pub fn out_dir(&self) -> Result<PathBuf> {
        match &self.out_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(find_project_root()?.join("target/dicts_gen")),
        }
    }

    /// Dataset location for `target`, defaulting to the consumer's snapshot
    pub fn dataset(&self, target: Target) -> Result<String> {
        let explicit = match target {
            Target::ResearchAbilities => &self.research_dataset,
            Target::UnitAbilities => &self.units_dataset,
        };
        match explicit {
            Some(location) => Ok(location.clone()),
            None => {
                let path = find_project_root()?
                    .join(CONSUMER_CRATE)
                    .join("data")
                    .join(target.dataset_file());
                Ok(path.display().to_string())
            }
        }
    }

    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            on_duplicate: self.on_duplicate.into(),
            ..GenerateOptions::default()
        }
    }
}

/// Render every selected table in memory.
///
/// Nothing is written here; any fatal error aborts before the caller touches
/// the output directory.
pub fn render_all(inputs: &InputArgs) -> Result<Vec<Generated>> {
    let ids_dir = inputs.ids_dir()?;
    let tables = IdTables::from_dir(&ids_dir)
        .with_context(|| format!("Failed to load id enums from {}", ids_dir.display()))?;
    let options = inputs.options();
    let timeout = Duration::from_secs(inputs.timeout);

    inputs
        .table
        .targets()
        .into_iter()
        .map(|target| {
            let source = open_source(&inputs.dataset(target)?, timeout);
            generate_from(target, &tables, source.as_ref(), &options)
                .with_context(|| format!("Failed to generate {}", target))
        })
        .collect()
}
