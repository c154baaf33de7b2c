// Runtime and OS metrics via sysinfo

mod linux;

use crate::models::{ProcessStats, SystemInfo};
use std::sync::Arc;
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::instrument;

pub struct SysinfoRepo {
    sys: Arc<std::sync::Mutex<System>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
        }
    }

    /// OS identity plus the dynamic host metrics the snapshot carries
    /// (uptime, load averages, memory).
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_system_info"))]
    pub async fn get_system_info(&self) -> anyhow::Result<SystemInfo> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();
            let name = System::name().unwrap_or_else(|| std::env::consts::OS.into());
            let os_version = System::os_version().unwrap_or_default();
            let host_name = System::host_name().unwrap_or_default();
            let cpu_name = linux::read_cpu_model_linux()
                .or_else(|| {
                    sys.cpus()
                        .first()
                        .map(|c| c.name().to_string())
                        .filter(|s| !s.is_empty() && s != "cpu0")
                })
                .unwrap_or_else(|| "Unknown".into());
            let os_manufacturer = linux::read_os_manufacturer_linux().unwrap_or_default();
            let load = System::load_average();
            Ok(SystemInfo {
                os_family: name,
                os_manufacturer,
                os_version,
                host_name,
                processor_name: cpu_name,
                uptime_secs: System::uptime(),
                load_avg_one: load.one,
                load_avg_five: load.five,
                load_avg_fifteen: load.fifteen,
                total_memory: sys.total_memory(),
                available_memory: sys.available_memory(),
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    /// Memory and thread count of the balancer process itself.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_self_stats"))]
    pub async fn get_self_stats(&self) -> anyhow::Result<(ProcessStats, usize)> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            let pid = Pid::from_u32(std::process::id());
            sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            let process = sys
                .process(pid)
                .ok_or_else(|| anyhow::anyhow!("own process {} not found", pid))?;
            let threads = 1 + process.tasks().map(|t| t.len()).unwrap_or(0);
            Ok((
                ProcessStats {
                    rss_bytes: process.memory(),
                    virtual_bytes: process.virtual_memory(),
                    run_time_secs: process.run_time(),
                },
                threads,
            ))
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }
}
