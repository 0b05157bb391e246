//! # Storefront Shell Library
//!
//! Headless host for the storefront screens. It owns the session's cart
//! store and serves it over a line-oriented JSON bridge.
//!
//! ## Module Organization
//! ```text
//! storefront_shell_lib/
//! ├── lib.rs          ◄─── You are here (startup & serve loop)
//! ├── bridge.rs       ◄─── Request routing, wire format
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store (watch channel) + observer
//! │   ├── catalog.rs  ◄─── Seeded product catalog
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── product.rs  ◄─── Catalog commands
//! │   ├── checkout.rs ◄─── Order summary
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod bridge;
pub mod commands;
pub mod error;
pub mod state;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bridge::Bridge;
use state::{CartStore, CatalogState, ConfigState};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,storefront_shell_lib=debug";

/// Runs the shell until stdin closes or Ctrl-C.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Shell Startup                                     │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, override with RUST_LOG                             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOREFRONT_* environment variables over defaults                  │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CartStore: the ONE cart for this session                          │
/// │     • CatalogState: seeded products                                     │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • Cart observer task follows changes                                │
/// │     • Bridge answers one JSON line per request on stdout                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting storefront shell");

    let config = ConfigState::from_env()?;
    info!(
        tax_rate_bps = config.tax_rate_bps,
        discount_rate_bps = config.discount_rate_bps,
        delivery_fee_cents = config.delivery_fee_cents,
        "Configuration loaded"
    );

    let cart = CartStore::new();
    let catalog = CatalogState::seeded();
    info!(session = %cart.session_id(), products = catalog.all().len(), "State initialized");

    let observer = tokio::spawn(state::cart::observe(cart.subscribe()));
    let bridge = Bridge::new(cart, catalog, config);

    let mut stdout = tokio::io::stdout();
    tokio::select! {
        served = serve(&bridge, tokio::io::stdin(), &mut stdout) => served?,
        _ = shutdown_signal() => info!("Interrupted"),
    }

    // Dropping the last store handle closes the channel and ends the observer
    drop(bridge);
    observer.await?;

    info!("Shell shutdown complete");
    Ok(())
}

/// Answers one response line per non-blank request line until `input` ends.
pub async fn serve<R, W>(bridge: &Bridge, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = bridge.handle_line(&line);
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');

        output.write_all(&encoded).await?;
        output.flush().await?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, with DEBUG for this crate
///
/// Logs go to stderr; stdout belongs to the bridge.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
