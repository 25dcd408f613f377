//! Packaged-asset resolution and asset naming rules.
//!
//! Icons and fonts are looked up relative to a single assets root. The root
//! is discovered once through a chain: explicit config override, the
//! `APPSHELL_ASSETS` environment variable, an `assets/` directory next to
//! the executable, and finally the crate's own `assets/` directory for
//! development runs. Mutable files (the logo cache) live under the runtime
//! directory instead and are never looked up through the chain.

use std::path::{Path, PathBuf};

/// Environment variable naming the assets root, highest-priority after an
/// explicit config override.
pub const ASSETS_ENV_VAR: &str = "APPSHELL_ASSETS";

/// Resolves asset-relative paths against the discovered assets root.
#[derive(Clone, Debug)]
pub struct AssetResolver {
    root: Option<PathBuf>,
}

impl AssetResolver {
    /// Walk the resolution chain and keep the first existing directory.
    pub fn discover(override_dir: Option<&Path>) -> Self {
        if let Some(dir) = override_dir {
            if dir.is_dir() {
                return Self {
                    root: Some(dir.to_path_buf()),
                };
            }
            log::warn!("configured assets dir {:?} does not exist", dir);
        }
        if let Ok(dir) = std::env::var(ASSETS_ENV_VAR) {
            let dir = PathBuf::from(dir);
            if dir.is_dir() {
                return Self { root: Some(dir) };
            }
            log::warn!("{}={:?} does not exist", ASSETS_ENV_VAR, dir);
        }
        if let Some(dir) = exe_dir().map(|d| d.join("assets")) {
            if dir.is_dir() {
                return Self { root: Some(dir) };
            }
        }
        let dev = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        if dev.is_dir() {
            return Self { root: Some(dev) };
        }
        log::warn!("no assets directory found; icon and font loads will be skipped");
        Self { root: None }
    }

    /// The discovered assets root, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Full path of an asset-relative file, if it exists under the root.
    pub fn resolve(&self, rel: &str) -> Option<PathBuf> {
        let path = self.root.as_ref()?.join(rel);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }
}

/// Directory of the running executable.
fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()?
        .parent()
        .map(Path::to_path_buf)
}

/// Directory for mutable application files; the executable's directory, or
/// the working directory when that cannot be determined.
pub fn runtime_dir() -> PathBuf {
    exe_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Where the fetched logo is cached: `<runtime dir>/assets/<cache_file>`.
pub fn logo_cache_path(cache_file: &str) -> PathBuf {
    runtime_dir().join("assets").join(cache_file)
}

/// Derive the active-state icon file name: `home.svg` becomes `home-2.svg`.
/// Names without the `.svg` suffix pass through unchanged.
pub fn active_icon_file(file: &str) -> String {
    file.replace(".svg", "-2.svg")
}
