use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{error::worker::WorkerError, model::worker::IndexJob};

/// Sending side of the in-process index job queue.
///
/// Cloned into every [`PlaceStore`](crate::service::store::PlaceStore) so saves can hand
/// their post-commit refresh to the worker without waiting for it.
#[derive(Clone, Debug)]
pub struct IndexQueue {
    sender: UnboundedSender<IndexJob>,
}

impl IndexQueue {
    /// Creates a queue and the receiver the worker consumes.
    pub fn new() -> (Self, UnboundedReceiver<IndexJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }

    /// Enqueues a job.
    ///
    /// # Returns
    /// - `Ok(())`: Job was queued
    /// - `Err(WorkerError::QueueClosed)`: The worker side has been dropped
    pub fn push(&self, job: IndexJob) -> Result<(), WorkerError> {
        self.sender
            .send(job)
            .map_err(|e| WorkerError::QueueClosed(e.0.to_string()))
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
