use super::{render_all, InputArgs};
use crate::models::{ArtifactReport, ArtifactStatus, RunReport};
use anyhow::{Context, Result};
use clap::Args;
use sc2_dicts_codegen::write_artifact;
use std::path::Path;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print the run report as JSON instead of the console summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: GenerateArgs) -> Result<ExitCode> {
    let out_dir = args.inputs.out_dir()?;
    let report = run(&args.inputs, &out_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(ExitCode::SUCCESS)
}

/// Render every selected table, then write them all.
pub fn run(inputs: &InputArgs, out_dir: &Path) -> Result<RunReport> {
    let generated = render_all(inputs)?;

    let mut artifacts = Vec::with_capacity(generated.len());
    for artifact in generated {
        let path = out_dir.join(artifact.target.file_name());
        write_artifact(&path, &artifact.text)
            .with_context(|| format!("Failed to write {}", artifact.target))?;
        artifacts.push(ArtifactReport {
            table: artifact.target.to_string(),
            path: path.display().to_string(),
            entries: artifact.entries,
            status: ArtifactStatus::Written,
            diagnostics: artifact.diagnostics.iter().map(|d| d.to_string()).collect(),
        });
    }
    Ok(RunReport::new("generate", artifacts))
}
