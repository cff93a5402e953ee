use std::net::TcpListener;

use servo_web_host::api::AppState;
use servo_web_host::cli::{self, Command};
use servo_web_host::config::Config;
use servo_web_host::server;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_connection_info(bind: &str, http_port: u16, device_base: &str) {
    eprintln!();
    eprintln!("  \x1b[1;36mservo-web\x1b[0m v{VERSION}");
    eprintln!();
    eprintln!("  \x1b[1;32m[http]\x1b[0m   Panels served at port \x1b[1;96m{http_port}\x1b[0m");
    if device_base.is_empty() {
        eprintln!("  \x1b[1;32m[device]\x1b[0m Loopback: control requests are logged here");
    } else {
        eprintln!("  \x1b[1;32m[device]\x1b[0m Panels send to \x1b[1;96m{device_base}\x1b[0m");
    }
    eprintln!();
    eprintln!("  \x1b[1;37m>\x1b[0m Open: \x1b[4;96mhttp://{bind}:{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mPress Ctrl+C to stop\x1b[0m");
    eprintln!();
}

/// Graceful start: Check if port is available
fn check_port_available(bind: &str, port: u16) -> bool {
    TcpListener::bind(format!("{bind}:{port}")).is_ok()
}

/// Graceful start: Find available port starting from default
fn find_available_port(bind: &str, start: u16) -> Option<u16> {
    (start..start.saturating_add(10)).find(|&port| check_port_available(bind, port))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let overrides = match cli::parse_args(&args)? {
        Command::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Version => {
            println!("servo-web {VERSION}");
            return Ok(());
        }
        Command::Serve(overrides) => overrides,
    };

    // === LOAD CONFIGURATION ===
    let mut config = if let Some(path) = &overrides.config {
        Config::load_from_path(path)?
    } else {
        let path = Config::default_config_path();
        if let Err(e) = Config::create_default_if_missing(&path) {
            tracing::warn!(path = %path.display(), error = %e, "Could not write default config");
        }
        tracing::info!(path = %path.display(), "Loading config");
        Config::load()
    };
    overrides.apply(&mut config);

    // === GRACEFUL START ===
    let bind = config.server.bind.clone();
    let http_port = if check_port_available(&bind, config.server.http_port) {
        config.server.http_port
    } else {
        tracing::warn!(port = config.server.http_port, "Port in use, finding alternative");
        find_available_port(&bind, config.server.http_port.saturating_add(1)).ok_or_else(|| {
            anyhow::anyhow!(
                "No available HTTP ports in range {}-{}",
                config.server.http_port,
                config.server.http_port.saturating_add(10)
            )
        })?
    };

    print_connection_info(&bind, http_port, &config.server.device_base);

    // === START HTTP SERVER (axum) ===
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = server::app(AppState::new(&config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind((bind.as_str(), http_port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
