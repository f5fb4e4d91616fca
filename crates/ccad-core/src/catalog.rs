//! The fixed asset catalogs for the Chicken Cross game.
//!
//! Everything ccad downloads is named here; there is no remote index to
//! enumerate, so completeness depends on these lists staying in sync with
//! the game build they were captured from.

/// Plain (single-part) spritesheet metadata documents.
pub const SPRITESHEET_DOCUMENTS: &[&str] = &[
    "chicken-body-content.json",
    "chicken-faces.json",
    "chicken-background-content-1.json",
    "chicken-background-content-2.json",
    "chicken-cross-cars.json",
    "blocker.json",
    "snow-theme.json",
];

/// A multi-part animated spritesheet: one metadata document per part.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedGroup {
    pub name: &'static str,
    pub parts: &'static [&'static str],
}

/// Animated spritesheets split across several metadata documents.
pub const ANIMATED_GROUPS: &[AnimatedGroup] = &[
    AnimatedGroup {
        name: "chicken-dust",
        parts: &["chicken-dust-part-1.json", "chicken-dust-part-2.json"],
    },
    AnimatedGroup {
        name: "snow",
        parts: &["snow-1.json", "snow-2.json", "snow-3.json", "snow-4.json"],
    },
];

/// Texture atlas PNGs fetched even when no metadata document references them.
/// Guarantees completeness if discovery comes up short (missing or malformed
/// metadata).
pub const FALLBACK_IMAGES: &[&str] = &[
    "chicken-body-content.png",
    "chicken-faces.png",
    "chicken-background-content-1.png",
    "chicken-background-content-2.png",
    "chicken-cross-cars.png",
    "blocker.png",
    "snow-theme.png",
    "chicken-dust-part-1.png",
    "chicken-dust-part-2.png",
    "snow-1.png",
    "snow-2.png",
    "snow-3.png",
    "snow-4.png",
];

/// Audio clips under the game's audio CDN path.
pub const AUDIO_CLIPS: &[&str] = &[
    "traffic-car-1-quite.mp3",
    "traffic-car-1-loud.mp3",
    "traffic-car-2-loud.mp3",
    "traffic-car-3-loud.mp3",
    "traffic-car-4-loud.mp3",
    "traffic-car-2-quite.mp3",
    "traffic-car-3-quite.mp3",
    "traffic-car-4-quite.mp3",
    "traffic-police-2-loud.mp3",
    "traffic-police-2-quite.mp3",
    "traffic-truck-1-loud.mp3",
    "traffic-truck-2-loud.mp3",
    "traffic-truck-1-quite.mp3",
    "traffic-truck-2-quite.mp3",
    "barrier-impact-0.mp3",
    "barrier-impact-1.mp3",
    "barrier-impact-2.mp3",
    "chirp-1.mp3",
    "chirp-2.mp3",
    "chirp-3.mp3",
    "chirp-4.mp3",
    "chirp-idle.mp3",
    "cluck-1.mp3",
    "cluck-2.mp3",
    "cluck-3.mp3",
    "cluck-4.mp3",
    "eating-seeds.mp3",
    "footstep-1.mp3",
    "footstep-2.mp3",
    "footstep-3.mp3",
    "footstep-4.mp3",
    "game-over.mp3",
    "ghost.mp3",
    "get-hit.mp3",
    "honk.mp3",
    "honk-1.mp3",
    "honk-2.mp3",
    "land.mp3",
    "safe-lane.mp3",
    "start-cross.mp3",
    "win.mp3",
    "cash-out.mp3",
];

/// The one UI sound, served from a shared path outside the game's own prefix.
pub const UI_AUDIO_CLIP: &str = "button-click-very-low.mp3";

/// All spritesheet metadata documents to fetch, in catalog order: the plain
/// documents first, then every part of each animated group.
pub fn metadata_documents() -> impl Iterator<Item = &'static str> {
    SPRITESHEET_DOCUMENTS
        .iter()
        .copied()
        .chain(ANIMATED_GROUPS.iter().flat_map(|g| g.parts.iter().copied()))
}
