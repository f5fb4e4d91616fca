//! Atlas discovery from spritesheet metadata documents.
//!
//! Scans the images directory for every `.json` file (not just what the
//! current run fetched, so documents left by a prior partial run count too)
//! and collects the `meta.image` atlas reference from each. Parse failures
//! are warnings; the fallback catalog covers anything discovery misses.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Subset of the TexturePacker sheet format we care about.
#[derive(Debug, Deserialize)]
struct SheetDocument {
    #[serde(default)]
    meta: Option<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    #[serde(default)]
    image: Option<String>,
}

/// Scan `images_dir` and return the deduplicated set of atlas image names
/// referenced by its metadata documents. Sorted, so download order is
/// deterministic regardless of directory listing order.
pub fn discover_images(images_dir: &Path) -> Result<BTreeSet<String>> {
    let mut found = BTreeSet::new();
    let entries = fs::read_dir(images_dir)
        .with_context(|| format!("failed to list {}", images_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let doc_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?")
            .to_string();
        match parse_image_ref(&path) {
            Ok(Some(image)) => {
                if image.contains(['/', '\\']) || image.contains("..") {
                    tracing::warn!(doc = %doc_name, image = %image, "ignoring unsafe atlas reference");
                    continue;
                }
                tracing::debug!(doc = %doc_name, image = %image, "atlas reference");
                found.insert(image);
            }
            Ok(None) => {
                tracing::debug!(doc = %doc_name, "no atlas reference");
            }
            Err(e) => {
                println!("  [WARN] could not parse {doc_name}: {e:#}");
                tracing::warn!(doc = %doc_name, error = %format!("{e:#}"), "metadata parse failed");
            }
        }
    }
    Ok(found)
}

fn parse_image_ref(path: &Path) -> Result<Option<String>> {
    let data = fs::read_to_string(path)?;
    let doc: SheetDocument = serde_json::from_str(&data)?;
    Ok(doc.meta.and_then(|m| m.image))
}
