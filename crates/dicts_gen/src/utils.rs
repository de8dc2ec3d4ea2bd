use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

/// Nearest ancestor of the current directory whose Cargo.toml declares a
/// `[workspace]`.
pub fn find_project_root() -> Result<PathBuf> {
    let start = std::env::current_dir()?;
    let mut dir = start.clone();
    loop {
        let manifest = dir.join("Cargo.toml");
        if manifest.exists() && fs::read_to_string(&manifest)?.contains("[workspace]") {
            return Ok(dir);
        }
        if !dir.pop() {
            bail!(
                "No workspace Cargo.toml above {}; pass the paths explicitly",
                start.display()
            );
        }
    }
}
