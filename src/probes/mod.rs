// Storage probes: filesystem capacity and on-disk database size.
// Both are fail-soft: a probe error degrades its field to an all-zero struct
// and logs a warning. A status response must stay available even when a
// filesystem it inspects is not.

#[cfg(unix)]
mod statvfs;

#[cfg(unix)]
pub use statvfs::StatvfsStatter;

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::models::{DbStatus, DiskStatus};

pub const KB: u64 = 1024;
pub const MB: u64 = 1024 * KB;
pub const GB: u64 = 1024 * MB;

/// Convert a byte count to `unit`, rounded to 2 decimal places.
pub fn bytes_to(bytes: u64, unit: u64) -> f64 {
    (bytes as f64 / unit as f64 * 100.0).round() / 100.0
}

/// Raw block statistics for one filesystem, as returned by statvfs(2).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsBlockStats {
    pub blocks: u64,
    pub blocks_free: u64,
    pub blocks_avail: u64,
    pub block_size: u64,
}

/// Capability seam over the filesystem-statistics syscall, so the probe can
/// be exercised with deterministic fakes.
pub trait FilesystemStatter: Send + Sync {
    fn block_stats(&self, path: &Path) -> io::Result<FsBlockStats>;
}

/// Single filesystem-statistics query for a path, in gigabytes.
#[derive(Clone)]
pub struct DiskUsageProbe {
    statter: Arc<dyn FilesystemStatter>,
}

impl DiskUsageProbe {
    pub fn new(statter: Arc<dyn FilesystemStatter>) -> Self {
        Self { statter }
    }

    #[cfg(unix)]
    pub fn system() -> Self {
        Self::new(Arc::new(StatvfsStatter))
    }

    /// All-zero on failure; callers must read that as "unavailable", not as
    /// an empty disk. used = all - free, deliberately not all - avail
    /// (avail excludes reserved blocks).
    pub fn usage(&self, path: &Path) -> DiskStatus {
        let fs = match self.statter.block_stats(path) {
            Ok(fs) => fs,
            Err(e) => {
                warn!(error = %e, operation = "disk_usage", path = %path.display(), "statvfs failed");
                return DiskStatus::default();
            }
        };

        let all_gb = bytes_to(fs.blocks * fs.block_size, GB);
        let avail_gb = bytes_to(fs.blocks_avail * fs.block_size, GB);
        let free_gb = bytes_to(fs.blocks_free * fs.block_size, GB);
        DiskStatus {
            all_gb,
            used_gb: all_gb - free_gb,
            free_gb,
            avail_gb,
        }
    }
}

/// Recursive on-disk size of a directory tree, reported in MB and GB.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageSizeProbe;

impl StorageSizeProbe {
    pub fn new() -> Self {
        Self
    }

    /// All-or-nothing: any error while walking (one unreadable subtree is
    /// enough) discards the partial sum and yields a zero DbStatus, so a
    /// misleadingly low size is never reported.
    pub fn size(&self, path: &Path) -> DbStatus {
        match tree_size(path) {
            Ok(bytes) => DbStatus {
                size_mb: bytes_to(bytes, MB),
                size_gb: bytes_to(bytes, GB),
            },
            Err(e) => {
                warn!(error = %e, operation = "db_size", path = %path.display(), "storage walk failed");
                DbStatus::default()
            }
        }
    }
}

/// Sums the byte length of every regular file under `path`. Directories
/// contribute 0 directly; symlinks are not followed.
fn tree_size(path: &Path) -> io::Result<u64> {
    let mut total = 0u64;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            total += tree_size(&entry.path())?;
        } else if file_type.is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
