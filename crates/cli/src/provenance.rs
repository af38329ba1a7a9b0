use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file: the subcommand and its resolved parameters.
pub struct RunRecord {
    pub command: &'static str,
    pub params: Value,
}

impl RunRecord {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }

    fn document(self, artifact: &Path, callsite: &Location<'_>) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "profilegen_version": profilegen::VERSION,
            "callsite": format!("{}:{}", callsite.file(), callsite.line()),
            "command": self.command,
            "params": self.params,
            "outputs": [artifact.to_string_lossy()]
        })
    }
}

/// `cam.json` -> `cam.provenance.json`, in the same directory.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the provenance sidecar for an already written `artifact`.
#[track_caller]
pub fn write_sidecar(artifact: &Path, record: RunRecord) -> Result<PathBuf> {
    let doc = record.document(artifact, Location::caller());
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    from_env
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
