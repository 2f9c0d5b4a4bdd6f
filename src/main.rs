mod command;
mod config;
mod framer;
mod protocol;
mod registry;
mod session;
mod telemetry;
mod transport;

use config::SimConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use registry::Registry;
use std::io::Write as _;
use std::time::Duration;
use transport::{SerialConnector, TransportConnector};

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = SimConfig {
        port: resolve_port(config::DEFAULT_PORT),
        ..SimConfig::default()
    };

    let connector = SerialConnector::new(config.port.clone(), config.baud_rate);
    let stream = match connector.connect().await {
        Ok(stream) => stream,
        Err(e) => {
            // Transport open failure is the one fatal startup error.
            error!("{e:#}");
            return;
        }
    };
    info!("opened {}", connector.name());

    // Give the host side a moment to settle before announcing readiness.
    tokio::time::sleep(Duration::from_secs(1)).await;

    let registry = Registry::seeded();
    let rng = StdRng::from_entropy();

    tokio::select! {
        result = session::run(stream, &config, registry, rng) => {
            if let Err(e) = result {
                error!("session ended: {e:#}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, closing {}", config.port);
        }
    }
}

/// Pick the serial port: first CLI argument, else an interactive prompt,
/// else the default
fn resolve_port(default: &str) -> String {
    if let Some(port) = std::env::args().nth(1) {
        return port;
    }

    print!("Serial port (default {default}): ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(_) if !line.trim().is_empty() => line.trim().to_string(),
        _ => default.to_string(),
    }
}
