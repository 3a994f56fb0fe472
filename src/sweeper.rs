use std::time::Duration;

use tokio::sync::watch;

use crate::state::SharedState;

/// Periodically drop idle sessions until shutdown is signaled.
pub async fn run(state: SharedState, mut shutdown: watch::Receiver<bool>, every: Duration) {
    tracing::debug!("Session sweeper started");

    loop {
        if *shutdown.borrow() {
            break;
        }

        let removed = state.sessions.cleanup(state.config.session_ttl);
        if removed > 0 {
            tracing::debug!(
                removed,
                remaining = state.sessions.len(),
                "Expired idle sessions"
            );
        }

        tokio::select! {
            _ = tokio::time::sleep(every) => {}
            _ = shutdown.changed() => {}
        }
    }

    tracing::debug!("Session sweeper stopped");
}
