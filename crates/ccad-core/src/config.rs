use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

const DEFAULT_CDN_BASE: &str = "https://assets.rbgcdn.com/223k2P3/raw/originals/chicken-cross";
const DEFAULT_UI_AUDIO_BASE: &str = "https://assets.rbgcdn.com/223k2P3/raw/originals/audios/games/ui";

/// Global configuration loaded from `~/.config/ccad/config.toml`.
///
/// The CDN rejects requests without a browser-like identity, so the default
/// user agent and referrer mimic Chrome visiting the game page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CcadConfig {
    /// Base URL for the game's own assets (`<base>/images/*`, `<base>/audio/*`).
    pub cdn_base: String,
    /// Base URL for the shared UI sound, outside the game's prefix.
    pub ui_audio_base: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// `Referer` header sent with every request.
    pub referer: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Disable TLS certificate verification. The CDN has served certificates
    /// that fail strict validation; the fetch is read-only so the original
    /// capture accepted the risk. Kept as an explicit flag so the trust
    /// decision is visible here rather than buried in the transport.
    pub insecure_transport: bool,
}

impl Default for CcadConfig {
    fn default() -> Self {
        Self {
            cdn_base: DEFAULT_CDN_BASE.to_string(),
            ui_audio_base: DEFAULT_UI_AUDIO_BASE.to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
                .to_string(),
            referer: "https://rainbet.com/".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            insecure_transport: true,
        }
    }
}

impl CcadConfig {
    /// URL of a spritesheet metadata document or texture atlas.
    pub fn image_url(&self, name: &str) -> Result<Url> {
        join_asset(&self.cdn_base, "images", name)
    }

    /// URL of a game audio clip.
    pub fn audio_url(&self, name: &str) -> Result<Url> {
        join_asset(&self.cdn_base, "audio", name)
    }

    /// URL of the shared UI sound.
    pub fn ui_audio_url(&self, name: &str) -> Result<Url> {
        join_asset(&self.ui_audio_base, "", name)
    }
}

fn join_asset(base: &str, subdir: &str, name: &str) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("invalid CDN base: {base}"))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("CDN base cannot carry path segments: {base}"))?;
        segments.pop_if_empty();
        if !subdir.is_empty() {
            segments.push(subdir);
        }
        segments.push(name);
    }
    Ok(url)
}

/// The local output tree: one subdirectory per asset class.
#[derive(Debug, Clone)]
pub struct AssetDirs {
    pub images: PathBuf,
    pub audio: PathBuf,
    pub ui_audio: PathBuf,
}

impl AssetDirs {
    pub fn under(base: &Path) -> Self {
        Self {
            images: base.join("images"),
            audio: base.join("audio"),
            ui_audio: base.join("ui-audio"),
        }
    }

    /// Create all three directories. A failure here is fatal for the run.
    pub fn create(&self) -> Result<()> {
        for dir in [&self.images, &self.audio, &self.ui_audio] {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create output dir {}", dir.display()))?;
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ccad")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CcadConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CcadConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CcadConfig = toml::from_str(&data)?;
    Ok(cfg)
}
