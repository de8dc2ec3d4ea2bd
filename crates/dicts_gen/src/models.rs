use serde::Serialize;

/// Machine readable summary of one `generate` or `check` run.
#[derive(Serialize, Default, Clone)]
pub struct RunReport {
    pub command: String,
    pub status: String,
    pub artifacts: Vec<ArtifactReport>,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct ArtifactReport {
    pub table: String,
    pub path: String,
    pub entries: usize,
    pub status: ArtifactStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    Written,
    Fresh,
    Stale,
    Missing,
}

impl ArtifactStatus {
    pub fn is_ok(self) -> bool {
        matches!(self, ArtifactStatus::Written | ArtifactStatus::Fresh)
    }
}

impl RunReport {
    pub fn new(command: &str, artifacts: Vec<ArtifactReport>) -> Self {
        let status = if artifacts.iter().all(|a| a.status.is_ok()) {
            "ok"
        } else {
            "stale"
        };
        RunReport {
            command: command.to_string(),
            status: status.to_string(),
            artifacts,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Console summary, one block per artifact
    pub fn print(&self) {
        println!("\n=== dicts_gen {} ===", self.command);
        for artifact in &self.artifacts {
            println!(
                "{:<24} {:<8} {:>4} entries  {}",
                artifact.table,
                format!("{:?}", artifact.status).to_lowercase(),
                artifact.entries,
                artifact.path
            );
            for diagnostic in &artifact.diagnostics {
                println!("    {}", diagnostic);
            }
        }
        println!("Status: {}", self.status);
    }
}
