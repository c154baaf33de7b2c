// Shared test helpers

use balancer_status::config::AppConfig;
use balancer_status::counters::CounterStore;
use balancer_status::models::{ProcessState, ServiceStats};
use balancer_status::probes::DiskUsageProbe;
use balancer_status::registry::{SharedEndpointRegistry, SharedWorkerRegistry};
use balancer_status::status::StatusAssembler;
use balancer_status::sysinfo_repo::SysinfoRepo;
use std::sync::Arc;

pub const TEST_SECRET: &str = "status-secret";

pub fn test_config(db_path: &str) -> AppConfig {
    let toml = format!(
        r#"
[server]
port = 8081
host = "0.0.0.0"

[api]
secret = "{TEST_SECRET}"
debug = false

[database]
path = "{db_path}"

[push]
vapid_public = "test-public-key"
vapid_private = "test-private-key"
"#
    );
    AppConfig::load_from_str(&toml).unwrap()
}

pub fn wallet_worker(port: u16) -> ServiceStats {
    ServiceStats {
        port,
        pid: 4242,
        args: vec!["--node".into(), "127.0.0.1:10000".into()],
        process_state: ProcessState::Running,
    }
}

pub struct TestDeps {
    pub counters: Arc<CounterStore>,
    pub wallet_pool: Arc<SharedWorkerRegistry>,
    pub bbs_pool: Arc<SharedWorkerRegistry>,
    pub endpoints: Arc<SharedEndpointRegistry>,
}

pub fn build_assembler(config: AppConfig) -> (StatusAssembler, TestDeps) {
    let counters = Arc::new(CounterStore::new());
    let wallet_pool = Arc::new(SharedWorkerRegistry::new());
    let bbs_pool = Arc::new(SharedWorkerRegistry::new());
    let endpoints = Arc::new(SharedEndpointRegistry::new());
    let assembler = StatusAssembler::new(
        config,
        counters.clone(),
        wallet_pool.clone(),
        bbs_pool.clone(),
        endpoints.clone(),
        Arc::new(SysinfoRepo::new()),
        DiskUsageProbe::system(),
    );
    (
        assembler,
        TestDeps {
            counters,
            wallet_pool,
            bbs_pool,
            endpoints,
        },
    )
}
