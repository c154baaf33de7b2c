// Per-worker process stats

use serde::{Deserialize, Serialize};

/// Momentary OS state of a managed worker, as last observed by the
/// supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProcessState {
    Running,
    Exited { code: i32 },
    Signaled { signal: i32 },
}

/// One managed worker process. This is a momentary copy taken from the
/// supervisor's registry; the worker may have been reaped by the time the
/// snapshot is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub port: u16,
    pub pid: u32,
    pub args: Vec<String>,
    pub process_state: ProcessState,
}

/// Wallet worker: ServiceStats widened with its endpoint/client counts.
/// The bbs pool has no such extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    #[serde(flatten)]
    pub service: ServiceStats,
    pub endpoints_cnt: u32,
    pub clients_cnt: u32,
}
