// Status assembler: joins counters, registries, runtime metrics and storage
// probes into one snapshot.
//
// Two error lanes, kept apart on purpose: auth failures are hard and abort
// the request before anything is read; probe failures are soft and only zero
// their own field. A zeroed block in the response is signal, not an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

use crate::auth::{AuthError, AuthGate};
use crate::config::AppConfig;
use crate::counters::CounterStore;
use crate::models::{ProcessStats, StatusSnapshot, SystemInfo, WalletStats};
use crate::probes::{DiskUsageProbe, StorageSizeProbe};
use crate::registry::{EndpointRegistry, WorkerRegistry};
use crate::sysinfo_repo::SysinfoRepo;

pub struct StatusAssembler {
    config: AppConfig,
    auth: AuthGate,
    counters: Arc<CounterStore>,
    wallet_pool: Arc<dyn WorkerRegistry>,
    bbs_pool: Arc<dyn WorkerRegistry>,
    endpoints: Arc<dyn EndpointRegistry>,
    sysinfo: Arc<SysinfoRepo>,
    disk_probe: DiskUsageProbe,
    db_size_probe: StorageSizeProbe,
}

impl StatusAssembler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: AppConfig,
        counters: Arc<CounterStore>,
        wallet_pool: Arc<dyn WorkerRegistry>,
        bbs_pool: Arc<dyn WorkerRegistry>,
        endpoints: Arc<dyn EndpointRegistry>,
        sysinfo: Arc<SysinfoRepo>,
        disk_probe: DiskUsageProbe,
    ) -> Self {
        let auth = AuthGate::new(config.api.secret.clone(), config.api.debug);
        Self {
            config,
            auth,
            counters,
            wallet_pool,
            bbs_pool,
            endpoints,
            sysinfo,
            disk_probe,
            db_size_probe: StorageSizeProbe::new(),
        }
    }

    /// Builds one coherent snapshot. Auth runs first; on rejection nothing
    /// else is read and no probe runs.
    pub async fn assemble(&self, secret: Option<&str>) -> Result<StatusSnapshot, AuthError> {
        self.auth.authorize(secret)?;

        let num_cpu = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(0);

        let (memory, num_threads) = match self.sysinfo.get_self_stats().await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, operation = "get_self_stats", "process stats failed");
                (ProcessStats::default(), 0)
            }
        };

        let sys_info = match self.sysinfo.get_system_info().await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, operation = "get_system_info", "system info failed");
                SystemInfo::default()
            }
        };

        let counters = self.counters.snapshot();
        let wallet_sockets = counters.active_sockets();

        // Endpoint counts are joined by listen port, a stable key, so the
        // wallet list may reorder or shrink between the two registry reads
        // without misattributing counts.
        let wallet_services: Vec<WalletStats> = self
            .wallet_pool
            .stats()
            .into_iter()
            .map(|service| {
                let (endpoints_cnt, clients_cnt) = self.endpoints.service_counts(service.port);
                WalletStats {
                    service,
                    endpoints_cnt,
                    clients_cnt,
                }
            })
            .collect();
        let bbs_services = self.bbs_pool.stats();

        // Blocking filesystem I/O; each probe degrades to zero on its own.
        let db_path = PathBuf::from(&self.config.database.path);
        let disk_probe = self.disk_probe.clone();
        let db_size_probe = self.db_size_probe;
        let (db_size, db_disk_usage, self_disk_usage) = tokio::task::spawn_blocking(move || {
            (
                db_size_probe.size(&db_path),
                disk_probe.usage(&db_path),
                disk_probe.usage(Path::new("./")),
            )
        })
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, operation = "storage_probes", "probe task join failed");
            Default::default()
        });

        Ok(StatusSnapshot {
            memory,
            sys_info,
            num_cpu,
            num_threads,
            max_wallet_services: wallet_services.len(),
            max_bbs_services: bbs_services.len(),
            wallet_services,
            bbs_services,
            config: self.config.redacted(),
            counters,
            wallet_sockets,
            db_size,
            db_disk_usage,
            self_disk_usage,
        })
    }
}
