// Storage / disk models

use serde::{Deserialize, Serialize};

/// Filesystem capacity in gigabytes. `used_gb = all_gb - free_gb`, not
/// `all_gb - avail_gb`: available excludes reserved blocks, so reserved space
/// counts as used. All-zero means the probe failed, not an empty disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskStatus {
    pub all_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub avail_gb: f64,
}

/// On-disk size of a directory tree. One measured byte count reported in two
/// units, each rounded independently. All-zero means the walk failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStatus {
    pub size_mb: f64,
    pub size_gb: f64,
}
