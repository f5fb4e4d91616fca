//! `ccad status` – count files already on disk, no network.

use anyhow::Result;
use ccad_core::config::AssetDirs;
use ccad_core::pipeline;
use std::path::Path;

pub fn run_status(output: &Path) -> Result<()> {
    let dirs = AssetDirs::under(output);
    for (label, dir) in [
        ("images", &dirs.images),
        ("audio", &dirs.audio),
        ("ui-audio", &dirs.ui_audio),
    ] {
        let count = if dir.is_dir() {
            pipeline::count_files(dir)?
        } else {
            0
        };
        println!("{:<9} {:>4} file(s)  {}", label, count, dir.display());
    }
    Ok(())
}
