//! Stage driver for the one-shot asset run.
//!
//! Fixed order: metadata documents → atlas discovery → discovered atlases →
//! fallback atlases → audio clips → UI audio. Each stage is a straight pass
//! over its catalog; a per-file failure is recorded and the pass continues.
//! Only filesystem problems outside the fetcher (creating the output tree,
//! listing a directory) abort the run.

use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

use crate::catalog;
use crate::config::{AssetDirs, CcadConfig};
use crate::fetcher::{self, FetchOutcome, Transport};
use crate::manifest;

/// Per-stage fetch outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl StageReport {
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }

    pub fn merge(&mut self, other: StageReport) {
        self.downloaded += other.downloaded;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Final tally of a run: files on disk per output directory, plus the
/// aggregated fetch report across all stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub image_files: usize,
    pub audio_files: usize,
    pub ui_audio_files: usize,
    pub report: StageReport,
}

/// Fetch every name in `names` into `dir`, building each URL with `url_for`.
/// Continues across per-file failures; the catalog is always exhausted.
/// A `url_for` error means broken configuration and is fatal.
pub fn download_batch<'a, I, F>(
    names: I,
    url_for: F,
    dir: &Path,
    transport: &Transport,
) -> Result<StageReport>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> Result<Url>,
{
    let mut report = StageReport::default();
    for name in names {
        let url = url_for(name).with_context(|| format!("cannot build URL for {name}"))?;
        let dest = dir.join(name);
        if !dest.exists() {
            println!("  [DL] {url}");
        }
        match fetcher::fetch(url.as_str(), &dest, transport) {
            Ok(FetchOutcome::Skipped) => {
                println!("  [SKIP] {name} (exists)");
                report.skipped += 1;
            }
            Ok(FetchOutcome::Downloaded(bytes)) => {
                println!("  [OK] {name} ({bytes} bytes)");
                tracing::debug!(name, bytes, "downloaded");
                report.downloaded += 1;
            }
            Err(e) => {
                println!("  [FAIL] {name}: {e}");
                tracing::warn!(name, error = %e, "fetch failed");
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

/// Run the full flow into `output_dir`. Returns the final tally; per-file
/// failures are reflected in the report, not in the `Result`.
pub fn run(cfg: &CcadConfig, output_dir: &Path) -> Result<RunSummary> {
    let dirs = AssetDirs::under(output_dir);
    dirs.create()?;
    let transport = Transport::from_config(cfg);

    println!("--- Spritesheet metadata ---");
    let mut report = download_batch(
        catalog::metadata_documents(),
        |n| cfg.image_url(n),
        &dirs.images,
        &transport,
    )?;

    // Discovery re-scans the directory rather than trusting the fetch pass,
    // so metadata left by a prior partial run is picked up too.
    let discovered = manifest::discover_images(&dirs.images)?;
    tracing::info!(count = discovered.len(), "atlas references discovered");

    println!("--- Atlas images ({}) ---", discovered.len());
    report.merge(download_batch(
        discovered.iter().map(String::as_str),
        |n| cfg.image_url(n),
        &dirs.images,
        &transport,
    )?);

    println!("--- Fallback atlas images ---");
    report.merge(download_batch(
        catalog::FALLBACK_IMAGES
            .iter()
            .copied()
            .filter(|n| !discovered.contains(*n)),
        |n| cfg.image_url(n),
        &dirs.images,
        &transport,
    )?);

    println!("--- Audio clips ({}) ---", catalog::AUDIO_CLIPS.len());
    report.merge(download_batch(
        catalog::AUDIO_CLIPS.iter().copied(),
        |n| cfg.audio_url(n),
        &dirs.audio,
        &transport,
    )?);

    println!("--- UI audio ---");
    report.merge(download_batch(
        std::iter::once(catalog::UI_AUDIO_CLIP),
        |n| cfg.ui_audio_url(n),
        &dirs.ui_audio,
        &transport,
    )?);

    let summary = RunSummary {
        image_files: count_files(&dirs.images)?,
        audio_files: count_files(&dirs.audio)?,
        ui_audio_files: count_files(&dirs.ui_audio)?,
        report,
    };
    println!(
        "Done: {} image files, {} audio files, {} ui-audio files \
         ({} downloaded, {} skipped, {} failed)",
        summary.image_files,
        summary.audio_files,
        summary.ui_audio_files,
        report.downloaded,
        report.skipped,
        report.failed
    );
    Ok(summary)
}

/// Count regular, non-hidden files in `dir`.
pub fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?
    {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && entry.file_type()?.is_file() {
            count += 1;
        }
    }
    Ok(count)
}
