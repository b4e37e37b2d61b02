//! Budgety is a small web app for tracking a personal budget: enter income
//! and expense items and watch the running totals, the available budget and
//! the per-expense percentage-of-income figures follow along.
//!
//! The heart of the crate is the in-memory [ledger] plus the
//! [orchestrator](orchestrator::Orchestrator) that sequences every mutation
//! with the two recalculation passes. The rest is a thin server-rendered web
//! layer that captures form input, renders the list, and never does any of
//! the arithmetic itself.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod budget;
mod endpoints;
mod error;
mod html;
pub mod ledger;
mod logging;
mod not_found;
pub mod orchestrator;
mod routing;
mod timezone;

pub use app_state::AppState;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
