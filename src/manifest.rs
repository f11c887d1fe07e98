//! Manifest rewriting for the generated project.
//!
//! The copied `package.json` still carries the template's identity, so the
//! patching stage rewrites the fields that describe the project and drops
//! the ones that point back at the template's repository. Every other
//! field passes through untouched and in its original order.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{INITIAL_VERSION, MANIFEST_FILE};
use crate::error::{Error, Result};
use crate::project::ProjectRequest;

/// A `package.json` with the identity fields typed out and everything
/// else carried verbatim.
///
/// `repository`, `bugs` and `homepage` describe the template, not the
/// generated project. They are accepted on parse and silently dropped on
/// write.
#[derive(Debug, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing)]
    repository: Option<Value>,
    #[serde(default, skip_serializing)]
    bugs: Option<Value>,
    #[serde(default, skip_serializing)]
    homepage: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Load the manifest at `path`, failing with a dedicated error when the
/// copied scaffold is missing it.
pub fn load_manifest(path: &Path) -> Result<PackageManifest> {
    if !path.exists() {
        return Err(Error::ManifestMissingError {
            path: path.display().to_string(),
        });
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Rewrite `target_dir`'s manifest with the identity from `request`.
///
/// The version always restarts at [`INITIAL_VERSION`] and the author is
/// written even when empty. Output is pretty-printed with two-space
/// indentation and a trailing newline.
pub fn patch_manifest(target_dir: &Path, request: &ProjectRequest) -> Result<()> {
    let path = target_dir.join(MANIFEST_FILE);
    let mut manifest = load_manifest(&path)?;

    manifest.name = request.project_name.clone();
    manifest.version = INITIAL_VERSION.to_string();
    manifest.description = request.description.clone();
    manifest.author = request.author.clone();

    save_manifest(&path, &manifest)
}

fn save_manifest(path: &Path, manifest: &PackageManifest) -> Result<()> {
    let mut rendered = serde_json::to_string_pretty(manifest)?;
    rendered.push('\n');
    fs::write(path, rendered)?;
    Ok(())
}
