//! `ccad catalog` – print the embedded asset catalogs.

use ccad_core::catalog;

pub fn run_catalog() {
    println!("Spritesheet metadata documents:");
    for doc in catalog::SPRITESHEET_DOCUMENTS {
        println!("  {doc}");
    }
    for group in catalog::ANIMATED_GROUPS {
        println!("  {} ({} parts):", group.name, group.parts.len());
        for part in group.parts {
            println!("    {part}");
        }
    }
    println!("\nFallback atlas images:");
    for png in catalog::FALLBACK_IMAGES {
        println!("  {png}");
    }
    println!("\nAudio clips:");
    for clip in catalog::AUDIO_CLIPS {
        println!("  {clip}");
    }
    println!("\nUI audio:");
    println!("  {}", catalog::UI_AUDIO_CLIP);
}
