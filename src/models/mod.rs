// Wire models for the status snapshot

mod service;
mod status;
mod storage;
mod system;

pub use service::{ProcessState, ServiceStats, WalletStats};
pub use status::StatusSnapshot;
pub use storage::{DbStatus, DiskStatus};
pub use system::{ProcessStats, SystemInfo};
