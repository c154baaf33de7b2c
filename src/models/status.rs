// Aggregate status snapshot

use serde::Serialize;

use super::{DbStatus, DiskStatus, ProcessStats, ServiceStats, SystemInfo, WalletStats};
use crate::config::AppConfig;
use crate::counters::Counters;

/// One coherent status response. Built fresh per request, owned by the
/// handler until serialized; never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub memory: ProcessStats,
    pub sys_info: SystemInfo,
    pub num_cpu: usize,
    pub num_threads: usize,
    pub max_wallet_services: usize,
    pub max_bbs_services: usize,
    pub wallet_services: Vec<WalletStats>,
    pub bbs_services: Vec<ServiceStats>,
    /// Redacted copy of the running config (push private key masked).
    pub config: AppConfig,
    pub counters: Counters,
    pub wallet_sockets: i64,
    pub db_size: DbStatus,
    pub db_disk_usage: DiskStatus,
    pub self_disk_usage: DiskStatus,
}
