use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file.
pub struct Provenance {
    pub command: &'static str,
    pub params: Value,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }

    pub fn to_json(&self, outputs: &[&Path]) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "kernel_version": patchgeom::VERSION,
            "command": self.command,
            "params": self.params,
            "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>(),
        })
    }
}

/// Write `<stem>.provenance.json` next to `output`.
pub fn write_sidecar<P: AsRef<Path>>(output: P, prov: &Provenance) -> Result<PathBuf> {
    let output = output.as_ref();
    let sidecar = sidecar_path(output);
    let doc = prov.to_json(&[output]);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), "provenance_written");
    Ok(sidecar)
}

fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".provenance.json");
    output.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|out| out.status.success())
                .and_then(|out| String::from_utf8(out.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/hits.json"));
        assert_eq!(derived, Path::new("/tmp/out/hits.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_command_and_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("hits.json");
        fs::write(&output, "{}").unwrap();
        let prov = Provenance::new("query", json!({"x": 1.0, "y": 2.0}));
        let path = write_sidecar(&output, &prov).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "query");
        assert_eq!(parsed["params"]["y"], 2.0);
        assert_eq!(parsed["kernel_version"], patchgeom::VERSION);
        assert_eq!(parsed["outputs"][0], output.to_string_lossy().as_ref());
    }
}
