//! # Storefront Shell Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from the environment
//! 3. Create the cart store, catalog and config state
//! 4. Serve JSON-line commands on stdin/stdout until EOF or Ctrl-C
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    storefront_shell_lib::run().await
}
