// Host identity and supervisor-process metrics

use serde::{Deserialize, Serialize};

/// OS-level system info block, passed through into the snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub os_family: String,
    pub os_manufacturer: String,
    pub os_version: String,
    pub host_name: String,
    pub processor_name: String,
    pub uptime_secs: u64,
    pub load_avg_one: f64,
    pub load_avg_five: f64,
    pub load_avg_fifteen: f64,
    pub total_memory: u64,
    pub available_memory: u64,
}

/// Memory and runtime metrics of the balancer process itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStats {
    pub rss_bytes: u64,
    pub virtual_bytes: u64,
    pub run_time_secs: u64,
}
