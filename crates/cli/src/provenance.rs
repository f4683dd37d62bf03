use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a placement artifact.
pub struct Payload {
    pub params: Value,
    /// Input files the artifact was computed from.
    pub inputs: Vec<String>,
    /// Optional run tag from `--tag`.
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            tag: None,
        }
    }

    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// Full sidecar document for `artifact`, written from `callsite`.
    fn into_document(self, artifact: &Path, callsite: &Location<'_>) -> Value {
        let mut doc = header();
        doc["callsite"] = json!(format!("{}:{}", callsite.file(), callsite.line()));
        doc["tag"] = json!(self.tag);
        doc["params"] = self.params;
        doc["inputs"] = json!(self.inputs);
        doc["outputs"] = json!([artifact.to_string_lossy()]);
        doc
    }
}

/// Header fields shared by sidecars and `report`.
pub fn header() -> Value {
    json!({
        "code_rev": code_rev(),
        "arclabel_version": arclabel::VERSION,
    })
}

/// Write `<stem>.provenance.json` beside `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let doc = payload.into_document(artifact, Location::caller());
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "placement".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn read(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn tagged_sidecar_lists_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("runs/river.json");
        let payload = Payload::new(json!({"aspect": 0.3}))
            .with_inputs(["edges.csv", "request.json"])
            .with_tag(Some("nightly".into()));
        let path = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(path, dir.path().join("runs/river.provenance.json"));
        let doc = read(&path);
        assert_eq!(doc["inputs"], json!(["edges.csv", "request.json"]));
        assert_eq!(doc["tag"], "nightly");
        assert_eq!(doc["params"]["aspect"], 0.3);
        assert_eq!(doc["arclabel_version"], arclabel::VERSION);
    }

    #[test]
    fn untagged_sidecar_has_null_tag_and_no_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("demo.json");
        let doc = read(&write_sidecar(&artifact, Payload::new(json!({}))).unwrap());
        assert!(doc["tag"].is_null());
        assert_eq!(doc["inputs"], json!([]));
        assert!(doc["callsite"].as_str().unwrap().contains("provenance.rs"));
    }
}
