//! Ordered, fire-and-forget persistence of user collections

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::services::{MockBackend, UserDataUpdate};

#[derive(Debug)]
enum PersistJob {
    Write {
        user_id: String,
        update: UserDataUpdate,
    },
    Flush(oneshot::Sender<()>),
}

/// Single writer task per session. Jobs run strictly in submission order,
/// so once drained the stored collections equal the last ones enqueued.
#[derive(Debug, Clone)]
pub struct PersistQueue {
    tx: mpsc::UnboundedSender<PersistJob>,
}

impl PersistQueue {
    pub fn spawn(backend: Arc<MockBackend>, session_id: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<PersistJob>();

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                match job {
                    PersistJob::Write { user_id, update } => {
                        let key = update.key();
                        if let Err(e) = backend.update_user_data(&user_id, update).await {
                            warn!(
                                session_id = %session_id,
                                user_id = %user_id,
                                key = %key,
                                error = %e,
                                "Failed to persist user data"
                            );
                        }
                    }
                    PersistJob::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            debug!(session_id = %session_id, "Persist queue closed");
        });

        Self { tx }
    }

    pub fn enqueue(&self, user_id: &str, update: UserDataUpdate) {
        let job = PersistJob::Write {
            user_id: user_id.to_string(),
            update,
        };
        if self.tx.send(job).is_err() {
            warn!(user_id = %user_id, "Persist queue is closed, dropping write");
        }
    }

    /// Waits until every write enqueued before this call has finished
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(PersistJob::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}
