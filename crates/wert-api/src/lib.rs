//! # wert-api
//!
//! HTTP API layer for the Wert session proxy.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The session-creation proxy endpoint
//! - Static serving of the demo frontend
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/create-wert-session` | Create a Wert session |
//! | GET | `/health` | Health check |
//! | GET | `/*` | Static files |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
