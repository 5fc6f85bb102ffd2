//! # Wert Session Proxy
//!
//! Creates Wert payment sessions on behalf of a browser frontend.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export WERT_PARTNER_API_KEY=...
//! export WERT_PARTNER_ID=...
//! export WERT_PRIVATE_KEY=...
//!
//! # Run the server
//! wert-session-proxy
//! ```

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wert_api::{routes, state::AppState};
use wert_core::EnvSecrets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Missing credentials stop the process before it binds
    let secrets = EnvSecrets::load();
    let state = AppState::from_source(&secrets).map_err(|e| {
        error!("Refusing to start: {}", e);
        e
    })?;

    let addr = state.config.socket_addr()?;
    info!("Static files: {}", state.config.static_dir.display());
    info!("Session provider: {}", state.provider.provider_name());

    let app = routes::create_router(state);

    info!("Server running at http://{}", addr);
    info!("Create session: POST http://{}/api/create-wert-session", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Wert Session Proxy
  ━━━━━━━━━━━━━━━━━━
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
