use super::{render_all, InputArgs};
use crate::models::{ArtifactReport, ArtifactStatus, RunReport};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print the run report as JSON instead of the console summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CheckArgs) -> Result<ExitCode> {
    let out_dir = args.inputs.out_dir()?;
    let report = run(&args.inputs, &out_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    if report.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("\n[dicts_gen] Artifacts are out of date, run `dicts_gen generate`");
        Ok(ExitCode::FAILURE)
    }
}

/// Render every selected table and compare it with what is on disk.
pub fn run(inputs: &InputArgs, out_dir: &Path) -> Result<RunReport> {
    let generated = render_all(inputs)?;

    let mut artifacts = Vec::with_capacity(generated.len());
    for artifact in generated {
        let path = out_dir.join(artifact.target.file_name());
        let status = compare(&path, &artifact.text)?;
        if !status.is_ok() {
            tracing::warn!(path = %path.display(), ?status, "artifact out of date");
        }
        artifacts.push(ArtifactReport {
            table: artifact.target.to_string(),
            path: path.display().to_string(),
            entries: artifact.entries,
            status,
            diagnostics: artifact.diagnostics.iter().map(|d| d.to_string()).collect(),
        });
    }
    Ok(RunReport::new("check", artifacts))
}

/// Fresh when the file holds exactly `expected`.
fn compare(path: &Path, expected: &str) -> Result<ArtifactStatus> {
    match fs::read_to_string(path) {
        Ok(on_disk) if on_disk == expected => Ok(ArtifactStatus::Fresh),
        Ok(_) => Ok(ArtifactStatus::Stale),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ArtifactStatus::Missing),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
