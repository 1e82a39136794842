use anyhow::{anyhow, Context};
use axum::serve;
use iem_reports_core::expect_file;
use log::{error, info};
use reports::{app, build_app_state, get_config_info, get_log_level, setup_logger};
use std::{net::SocketAddr, str::FromStr};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = get_config_info();
    let log_level = get_log_level(&cli);

    setup_logger()
        .level(log_level)
        .level_for("reports", log_level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("http_response", log_level)
        .level_for("http_request", log_level)
        .apply()?;

    let database = cli.database();
    let static_dir = cli.static_dir();
    let remote_url = cli.remote_url();
    let download_url = cli.download_url();
    let networks = cli.networks();
    let host = cli.host();
    let port = cli.port();

    expect_file(&database, "observation database");

    let socket_addr = SocketAddr::from_str(&format!("{}:{}", host, port))
        .map_err(|e| anyhow!("invalid address: {}", e))?;

    let listener = TcpListener::bind(socket_addr)
        .await
        .with_context(|| format!("error binding to socket {}", socket_addr))?;

    info!("IEM Reports starting...");
    info!("  Listen:   http://{}", socket_addr);
    info!("  Docs:     http://{}/docs", socket_addr);
    info!("  Database: {}", database);
    info!("  Static:   {}", static_dir);
    info!("  Download: {}", download_url);
    info!(
        "  Networks: asos={} climate={} isusm={}",
        networks.asos, networks.climate, networks.isusm
    );

    let app_state = build_app_state(remote_url, static_dir, database, download_url, networks)
        .await
        .map_err(|e| {
            error!("error building app: {}", e);
            e
        })?;

    let app = app(app_state);

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
