//! `ccad run` – the full one-shot asset download.

use anyhow::Result;
use ccad_core::config::CcadConfig;
use ccad_core::pipeline;
use std::path::Path;

pub fn run_download(cfg: &CcadConfig, output: &Path) -> Result<()> {
    println!("Downloading Chicken Cross assets to {}", output.display());
    let summary = pipeline::run(cfg, output)?;
    if summary.report.failed > 0 {
        // Per-file failures are not fatal; they are visible inline and here.
        tracing::warn!(failed = summary.report.failed, "run finished with failures");
    }
    Ok(())
}
