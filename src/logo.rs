//! Logo acquisition: cache fast path, one remote fetch, fallback.
//!
//! The contract is a pure function over an injected fetch closure so it can
//! be exercised without a network: if the cache file exists its bytes win
//! and the closure is never called; otherwise the closure runs once, a
//! success is persisted to the cache, and a failure yields no cache file.
//! The shell runs [`resolve_logo`] on a background thread via
//! [`spawn_logo_task`] and polls the channel from the update loop.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use once_cell::sync::Lazy;

/// Shared blocking HTTP agent with a fixed overall timeout.
static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(10))
        .build()
});

/// Upper bound on accepted logo payloads.
const MAX_LOGO_BYTES: u64 = 8 * 1024 * 1024;

/// Outcome of logo acquisition.
#[derive(Clone, Debug, PartialEq)]
pub enum LogoResolution {
    /// Bytes read from the existing cache file. No fetch was attempted.
    Cached(Vec<u8>),
    /// Bytes fetched from the network (and written to the cache).
    Fetched(Vec<u8>),
    /// Neither cache nor fetch produced bytes; show the fallback glyph.
    Unavailable,
}

impl LogoResolution {
    /// The image bytes, if acquisition produced any.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            LogoResolution::Cached(b) | LogoResolution::Fetched(b) => Some(b),
            LogoResolution::Unavailable => None,
        }
    }
}

/// Resolve the logo against `cache_path`, fetching with `fetch` only when
/// the cache file does not exist.
///
/// On a successful fetch the bytes are written to `cache_path` (creating
/// parent directories); a write failure is logged but the bytes are still
/// returned for display. A failed fetch writes nothing.
pub fn resolve_logo<F>(cache_path: &Path, fetch: F) -> LogoResolution
where
    F: FnOnce() -> Result<Vec<u8>, String>,
{
    if cache_path.exists() {
        return match std::fs::read(cache_path) {
            Ok(bytes) => LogoResolution::Cached(bytes),
            Err(e) => {
                log::warn!("failed to read logo cache {:?}: {}", cache_path, e);
                LogoResolution::Unavailable
            }
        };
    }

    match fetch() {
        Ok(bytes) => {
            if let Some(dir) = cache_path.parent() {
                if let Err(e) = std::fs::create_dir_all(dir) {
                    log::warn!("failed to create cache dir {:?}: {}", dir, e);
                }
            }
            if let Err(e) = std::fs::write(cache_path, &bytes) {
                log::warn!("failed to write logo cache {:?}: {}", cache_path, e);
            }
            LogoResolution::Fetched(bytes)
        }
        Err(e) => {
            log::warn!("logo fetch failed: {}", e);
            LogoResolution::Unavailable
        }
    }
}

/// One unauthenticated GET of `url` via the shared agent.
///
/// Non-success statuses and transport errors both surface as `Err`.
pub fn fetch_logo_http(url: &str) -> Result<Vec<u8>, String> {
    let resp = HTTP_AGENT
        .get(url)
        .call()
        .map_err(|e| format!("GET {} failed: {}", url, e))?;
    let mut bytes = Vec::new();
    resp.into_reader()
        .take(MAX_LOGO_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| format!("reading body of {} failed: {}", url, e))?;
    Ok(bytes)
}

/// Run the full acquisition on a background thread.
///
/// The receiver yields exactly one [`LogoResolution`]; a dropped sender
/// (thread panic) reads as a disconnect and should be treated as
/// [`LogoResolution::Unavailable`].
pub fn spawn_logo_task(url: String, cache_path: PathBuf) -> mpsc::Receiver<LogoResolution> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let resolution = resolve_logo(&cache_path, || fetch_logo_http(&url));
        let _ = tx.send(resolution);
    });
    rx
}
