//! Desktop Path Resolver
//!
//! Resolves logical location kinds against XDG-style user directories (via
//! the `dirs` crate) and mounted removable volumes. Per-app directories are
//! created on first use; every query hits the OS at call time.

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::resolver::{PathResolver, StorageKind};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Desktop implementation of [`PathResolver`].
///
/// Paths are scoped under an application identifier so multiple embedders do
/// not collide:
///
/// - temporary → `<cache dir>/<app>`
/// - documents → `<data dir>/<app>`
/// - support → `<config dir>/<app>`
/// - external operations → per mounted volume, `<volume>/<app>/...`
pub struct DesktopPathResolver {
    app_id: String,
    cache_root: PathBuf,
    data_root: Option<PathBuf>,
    support_root: Option<PathBuf>,
    volume_roots: Vec<PathBuf>,
}

impl DesktopPathResolver {
    /// Create a resolver rooted at the OS defaults for the current user.
    ///
    /// The data and config roots may be unavailable on hosts with no home
    /// directory; the corresponding operations then fail with
    /// [`BridgeError::MissingHomeDirectory`] at call time.
    pub fn new(app_id: impl Into<String>) -> Self {
        let cache_root = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        let data_root = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")));
        let support_root = dirs::config_dir();

        Self {
            app_id: app_id.into(),
            cache_root,
            data_root,
            support_root,
            volume_roots: default_volume_roots(),
        }
    }

    /// Create a resolver with explicit roots. Used by embedders with their
    /// own directory layout and by tests.
    pub fn with_roots(
        app_id: impl Into<String>,
        cache_root: impl Into<PathBuf>,
        data_root: impl Into<PathBuf>,
        support_root: impl Into<PathBuf>,
        volume_roots: Vec<PathBuf>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            cache_root: cache_root.into(),
            data_root: Some(data_root.into()),
            support_root: Some(support_root.into()),
            volume_roots,
        }
    }

    fn app_dir(&self, root: &Path) -> Result<PathBuf> {
        ensure_dir(root.join(&self.app_id))
    }

    /// Enumerate mounted volumes under the candidate mount roots.
    ///
    /// A root that does not exist or cannot be read simply contributes
    /// nothing; symlinked entries (e.g. the boot volume under `/Volumes`)
    /// are skipped.
    fn mounted_volumes(&self) -> Vec<PathBuf> {
        let mut volumes = Vec::new();
        for root in &self.volume_roots {
            let entries = match fs::read_dir(root) {
                Ok(entries) => entries,
                Err(err) => {
                    debug!(root = ?root, error = %err, "mount root unavailable");
                    continue;
                }
            };
            for entry in entries.flatten() {
                let path = entry.path();
                match fs::symlink_metadata(&path) {
                    Ok(meta) if meta.is_dir() => volumes.push(path),
                    _ => {}
                }
            }
        }
        volumes.sort();
        volumes
    }

    /// App-scoped directory on every mounted volume, creating it where the
    /// volume permits. Volumes that reject creation (read-only media,
    /// vanished mounts) are omitted, never reported as partial errors.
    fn per_volume_dirs(&self, subpath: &Path) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for volume in self.mounted_volumes() {
            let dir = volume.join(&self.app_id).join(subpath);
            match fs::create_dir_all(&dir) {
                Ok(()) => dirs.push(dir),
                Err(err) => {
                    debug!(volume = ?volume, error = %err, "skipping unavailable volume");
                }
            }
        }
        dirs
    }
}

impl PathResolver for DesktopPathResolver {
    fn temporary_directory(&self) -> Result<PathBuf> {
        let dir = self.app_dir(&self.cache_root)?;
        debug!(path = ?dir, "resolved temporary directory");
        Ok(dir)
    }

    fn application_documents_directory(&self) -> Result<PathBuf> {
        let root = self
            .data_root
            .as_deref()
            .ok_or(BridgeError::MissingHomeDirectory)?;
        let dir = self.app_dir(root)?;
        debug!(path = ?dir, "resolved documents directory");
        Ok(dir)
    }

    fn application_support_directory(&self) -> Result<PathBuf> {
        let root = self
            .support_root
            .as_deref()
            .ok_or(BridgeError::MissingHomeDirectory)?;
        let dir = self.app_dir(root)?;
        debug!(path = ?dir, "resolved support directory");
        Ok(dir)
    }

    fn storage_directory(&self) -> Result<Option<PathBuf>> {
        let primary = self.mounted_volumes().into_iter().next();
        debug!(path = ?primary, "resolved storage directory");
        Ok(primary)
    }

    fn external_cache_directories(&self) -> Result<Vec<PathBuf>> {
        let dirs = self.per_volume_dirs(Path::new("cache"));
        debug!(count = dirs.len(), "resolved external cache directories");
        Ok(dirs)
    }

    fn external_storage_directories(&self, kind: StorageKind) -> Result<Vec<PathBuf>> {
        let dirs = self.per_volume_dirs(Path::new(kind.subdirectory()));
        debug!(kind = ?kind, count = dirs.len(), "resolved external storage directories");
        Ok(dirs)
    }
}

/// Create `path` if missing and return it in absolute form.
fn ensure_dir(path: PathBuf) -> Result<PathBuf> {
    fs::create_dir_all(&path)?;
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Candidate roots under which the OS mounts removable volumes.
fn default_volume_roots() -> Vec<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        match std::env::var_os("USER") {
            Some(user) => vec![
                PathBuf::from("/media").join(&user),
                PathBuf::from("/run/media").join(&user),
            ],
            None => Vec::new(),
        }
    }
    #[cfg(target_os = "macos")]
    {
        vec![PathBuf::from("/Volumes")]
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        Vec::new()
    }
}
