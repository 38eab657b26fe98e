//! Periodic sync trigger owning its own worker thread.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{info, warn};

use crate::{SyncMode, SyncRunner};

/// Configured intervals are floored to one minute.
pub const MIN_INTERVAL: Duration = Duration::from_secs(60);

enum Control {
    Stop,
    Reconfigure(Duration),
}

/// Runs `SyncMode::Sync` on a fixed interval until stopped. The handle is
/// explicit state owned by the caller; dropping it stops the worker.
pub struct Scheduler {
    tx: Sender<Control>,
    handle: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Spawn the worker. The first run happens one interval after start.
    pub fn start(runner: Arc<SyncRunner>, interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            let mut interval = interval.max(MIN_INTERVAL);
            info!(interval_secs = interval.as_secs(), "sync scheduler started");
            loop {
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => match runner.run(SyncMode::Sync) {
                        Ok(outcome) => info!(?outcome, "scheduled sync run"),
                        Err(err) => warn!(error = %err, "scheduled sync run failed"),
                    },
                    Ok(Control::Reconfigure(next)) => {
                        interval = next.max(MIN_INTERVAL);
                        info!(interval_secs = interval.as_secs(), "sync interval changed");
                    }
                    Ok(Control::Stop) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            info!("sync scheduler stopped");
        });
        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Change the interval without restarting the worker. Takes effect at
    /// the next tick.
    pub fn reconfigure(&self, interval: Duration) {
        let _ = self.tx.send(Control::Reconfigure(interval));
    }

    /// Stop the worker and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.tx.send(Control::Stop);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
