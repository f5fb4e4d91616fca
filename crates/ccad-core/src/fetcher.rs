//! Single-shot HTTP GET fetcher with skip-if-exists.
//!
//! One attempt per asset, no retry. The body is buffered in memory (assets
//! are small atlases and clips) and landed via a `.part` temp file renamed
//! into place, so an interrupted transfer never leaves a truncated file that
//! a later run would mistake for a completed one.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Transport parameters for a single fetch, taken from [`crate::config::CcadConfig`].
#[derive(Debug, Clone)]
pub struct Transport {
    pub user_agent: String,
    pub referer: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Skip TLS certificate verification (see the config field for rationale).
    pub insecure: bool,
}

impl Transport {
    pub fn from_config(cfg: &crate::config::CcadConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            referer: cfg.referer.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            insecure: cfg.insecure_transport,
        }
    }
}

/// What a single fetch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination already existed; no network activity.
    Skipped,
    /// Downloaded and written; carries the byte count.
    Downloaded(u64),
}

/// Error from a single fetch (curl failure, HTTP error, or filesystem write).
/// Typed so callers classify per asset instead of unwinding the whole run.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection refused, TLS, etc.).
    Curl(curl::Error),
    /// Response had a non-2xx status.
    Http(u32),
    /// Writing the body to disk failed.
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Io(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Io(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Io(e)
    }
}

/// Fetch `url` into `dest`.
///
/// Returns [`FetchOutcome::Skipped`] without touching the network if `dest`
/// already exists. Otherwise performs one GET with the browser-identity
/// headers the CDN requires, following redirects, and writes the full body.
/// No file is created on any failure path.
pub fn fetch(url: &str, dest: &Path, transport: &Transport) -> Result<FetchOutcome, FetchError> {
    if dest.exists() {
        return Ok(FetchOutcome::Skipped);
    }

    let body = get(url, transport)?;

    // Land via temp + rename so a partial write can't be mistaken for a
    // completed download on the next run.
    let part = dest.with_extension(part_extension(dest));
    fs::write(&part, &body)?;
    fs::rename(&part, dest)?;

    Ok(FetchOutcome::Downloaded(body.len() as u64))
}

fn part_extension(dest: &Path) -> String {
    match dest.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{ext}.part"),
        None => "part".to_string(),
    }
}

fn get(url: &str, transport: &Transport) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&transport.user_agent)?;
    easy.referer(&transport.referer)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(transport.connect_timeout)?;
    easy.timeout(transport.request_timeout)?;
    easy.fail_on_error(false)?;
    if transport.insecure {
        easy.ssl_verify_peer(false)?;
        easy.ssl_verify_host(false)?;
    }

    let mut list = curl::easy::List::new();
    list.append("Accept: */*")?;
    easy.http_headers(list)?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> Transport {
        Transport {
            user_agent: "test".to_string(),
            referer: "http://example.com/".to_string(),
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(2),
            insecure: false,
        }
    }

    #[test]
    fn existing_file_is_skipped_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("present.png");
        std::fs::write(&dest, b"already here").unwrap();

        // The URL is unresolvable; a skip must not even attempt it.
        let outcome = fetch("http://invalid.invalid/present.png", &dest, &transport()).unwrap();
        assert_eq!(outcome, FetchOutcome::Skipped);
        assert_eq!(std::fs::read(&dest).unwrap(), b"already here");
    }

    #[test]
    fn part_extension_appends_to_existing_extension() {
        assert_eq!(part_extension(Path::new("/x/a.png")), "png.part");
        assert_eq!(part_extension(Path::new("/x/noext")), "part");
    }

    #[test]
    fn failed_fetch_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing.png");

        let err = fetch("http://127.0.0.1:1/missing.png", &dest, &transport()).unwrap_err();
        assert!(matches!(err, FetchError::Curl(_)), "got {err}");
        assert!(!dest.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
