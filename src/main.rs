use anyhow::Result;
use balancer_status::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    // Shared state: the supervisor and the endpoint layer hold the same Arcs
    // and mutate them as workers start/stop and sockets open/close.
    let counters = Arc::new(counters::CounterStore::new());
    let wallet_pool = Arc::new(registry::SharedWorkerRegistry::new());
    let bbs_pool = Arc::new(registry::SharedWorkerRegistry::new());
    let endpoints = Arc::new(registry::SharedEndpointRegistry::new());
    let sysinfo_repo = Arc::new(sysinfo_repo::SysinfoRepo::new());

    let assembler = Arc::new(status::StatusAssembler::new(
        app_config.clone(),
        counters,
        wallet_pool,
        bbs_pool,
        endpoints,
        sysinfo_repo,
        probes::DiskUsageProbe::system(),
    ));

    let app = routes::app(assembler);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
