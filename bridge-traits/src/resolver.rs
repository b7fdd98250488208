//! Path Resolution Contract
//!
//! Translates a logical location kind into concrete OS paths. Implementations
//! live per platform (see the `bridge-desktop` crate); the core never touches
//! OS path APIs directly.

use std::path::PathBuf;

use crate::error::Result;

/// External-storage content categories, mirroring the integer type codes the
/// host sends with `getExternalStorageDirectories`.
///
/// The code table is part of the boundary contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Pictures,
    Movies,
    Music,
    Podcasts,
    Ringtones,
    Alarms,
    Notifications,
    Downloads,
    Dcim,
    Documents,
}

impl StorageKind {
    /// Translate a caller-supplied type code.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range code. The codes are a closed table shared
    /// with the host; receiving an unknown one is a programmer error on the
    /// caller side and is not recovered from.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Pictures,
            1 => Self::Movies,
            2 => Self::Music,
            3 => Self::Podcasts,
            4 => Self::Ringtones,
            5 => Self::Alarms,
            6 => Self::Notifications,
            7 => Self::Downloads,
            8 => Self::Dcim,
            9 => Self::Documents,
            other => panic!("unknown external storage type code: {other}"),
        }
    }

    /// Per-volume subdirectory that holds this kind of content.
    pub fn subdirectory(self) -> &'static str {
        match self {
            Self::Pictures => "Pictures",
            Self::Movies => "Movies",
            Self::Music => "Music",
            Self::Podcasts => "Podcasts",
            Self::Ringtones => "Ringtones",
            Self::Alarms => "Alarms",
            Self::Notifications => "Notifications",
            Self::Downloads => "Downloads",
            Self::Dcim => "DCIM",
            Self::Documents => "Documents",
        }
    }
}

/// Platform path resolver.
///
/// Every operation is a single blocking OS query executed wholly on the
/// calling thread; the execution strategy in `core-provider` decides which
/// thread that is. Results are always absolute paths queried at call time —
/// no caching.
///
/// Absence and failure are distinct: a location the platform simply does not
/// have right now is `Ok(None)` (or omitted from a sequence), while a failed
/// OS call is an `Err` carrying the OS error verbatim.
pub trait PathResolver: Send + Sync {
    /// OS-designated cache/temp directory for the application. Always
    /// present on supported platforms.
    fn temporary_directory(&self) -> Result<PathBuf>;

    /// OS-designated private data directory for the application.
    fn application_documents_directory(&self) -> Result<PathBuf>;

    /// OS-designated support-files directory, distinct from the documents
    /// directory where the platform distinguishes them.
    fn application_support_directory(&self) -> Result<PathBuf>;

    /// Root of the primary external storage volume, or `Ok(None)` when no
    /// external volume is mounted.
    fn storage_directory(&self) -> Result<Option<PathBuf>>;

    /// Application cache location on every mounted external volume.
    /// Unavailable volumes are omitted, never represented as placeholders.
    fn external_cache_directories(&self) -> Result<Vec<PathBuf>>;

    /// Content directory for `kind` on every mounted external volume, with
    /// the same mount-filtering rule as [`external_cache_directories`].
    ///
    /// [`external_cache_directories`]: PathResolver::external_cache_directories
    fn external_storage_directories(&self, kind: StorageKind) -> Result<Vec<PathBuf>>;
}
