//! Graceful shutdown with a bounded drain
//!
//! The server stops accepting as soon as a shutdown signal arrives. In-flight
//! requests then get `BOOKING_SHUTDOWN_TIMEOUT` seconds before the process
//! exits regardless.

use std::{future::Future, time::Duration};
use tokio::{signal, sync::oneshot};
use tracing::info;

/// Resolves on Ctrl+C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, draining connections"),
        _ = terminate => info!("Received SIGTERM, draining connections"),
    }
}

/// Split `signal` into a graceful-shutdown trigger and a drain deadline
///
/// The trigger resolves as soon as `signal` does and is meant for
/// `with_graceful_shutdown`. The deadline resolves `timeout` after the
/// trigger fired and never resolves if it did not.
pub fn drain_deadline<S>(
    signal: S,
    timeout: Duration,
) -> (
    impl Future<Output = ()> + Send + 'static,
    impl Future<Output = ()> + Send + 'static,
)
where
    S: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, fired_rx) = oneshot::channel::<()>();

    let trigger = async move {
        signal.await;
        let _ = fired_tx.send(());
    };

    let deadline = async move {
        if fired_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
        info!("Waiting up to {:?} for connections to close", timeout);
        tokio::time::sleep(timeout).await;
    };

    (trigger, deadline)
}
