//! Index worker error types.

use thiserror::Error;

/// Index job queue error type.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// The receiving side of the index queue has been dropped, so the job can't be delivered.
    ///
    /// The mutation that produced the job is already committed; the affected index rows stay
    /// stale until the next save touching them or a bulk rebuild.
    #[error("Index queue is closed, dropped job: {0}")]
    QueueClosed(String),
}
