//! Interrupt handling
//!
//! SIGINT and SIGTERM raise a [`CancelFlag`]; the sync engine stops at its
//! next checkpoint and the process exits cleanly.

use std::thread;

use filter_core::CancelFlag;
use tracing::{info, warn};

/// Listen for interrupts on a background thread
pub fn install(cancel: CancelFlag) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            runtime.block_on(async {
                match wait_for_signal().await {
                    Ok(signal) => {
                        info!("Received {}, exiting.", signal);
                        cancel.cancel();
                    }
                    Err(e) => warn!(error = %e, "Signal listener failed"),
                }
            });
        })?;

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|()| "SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|()| "Ctrl-C")
}
