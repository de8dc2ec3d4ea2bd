//! Artifact text assembly and output.

use crate::error::{CodegenError, Result};
use proc_macro2::TokenStream;
use std::fs;
use std::path::Path;

/// Generated source text, built fully in memory before it is written.
#[derive(Debug, Default)]
pub struct Artifact {
    text: String,
}

impl Artifact {
    /// Start an artifact with the provenance header.
    pub fn new(origin: &str) -> Self {
        let mut artifact = Artifact::default();
        artifact.line("// THIS FILE WAS AUTOMATICALLY GENERATED.");
        // Keep the header a single comment line whatever the dataset says
        let origin = origin.replace(|c: char| c.is_control(), " ");
        artifact.line(format!("// Source: {}", origin.trim()));
        artifact.blank();
        artifact
    }

    pub fn line(&mut self, line: impl AsRef<str>) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    pub fn blank(&mut self) {
        self.text.push('\n');
    }

    /// Append items rendered with `quote!`.
    pub fn tokens(&mut self, tokens: TokenStream) {
        self.line(tokens.to_string());
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// Write `text` to `path`, creating parent directories and replacing any old file.
pub fn write_artifact(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CodegenError::io(parent, e))?;
        }
    }
    fs::write(path, text).map_err(|e| CodegenError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote artifact");
    Ok(())
}
