//! In-process index worker.
//!
//! Saves push an [`IndexJob`] onto the [`IndexQueue`] after their transaction commits. The
//! [`IndexWorker`] consumes the queue on a single dispatcher task so jobs are applied in the
//! order they were committed.

pub mod handler;
pub mod queue;

pub use handler::IndexJobHandler;
pub use queue::IndexQueue;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc::UnboundedReceiver, Mutex, Notify, RwLock};
use tokio::task::JoinHandle;

use crate::model::worker::IndexJob;

const JOB_TIMEOUT: Duration = Duration::from_secs(300);
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Queue and worker pair sharing one channel.
pub struct Worker {
    pub queue: IndexQueue,
    pub pool: IndexWorker,
}

impl Worker {
    pub fn new(handler: IndexJobHandler) -> Self {
        let (queue, receiver) = IndexQueue::new();
        let pool = IndexWorker::new(receiver, handler);

        Self { queue, pool }
    }
}

/// Consumes index jobs either on a background task ([`IndexWorker::start`]) or on demand
/// ([`IndexWorker::drain`]).
#[derive(Clone)]
pub struct IndexWorker {
    inner: Arc<IndexWorkerRef>,
}

struct IndexWorkerRef {
    receiver: Mutex<UnboundedReceiver<IndexJob>>,
    handler: IndexJobHandler,
    shutdown: Notify,
    dispatcher_handle: RwLock<Option<JoinHandle<()>>>,
}

impl IndexWorker {
    pub fn new(receiver: UnboundedReceiver<IndexJob>, handler: IndexJobHandler) -> Self {
        Self {
            inner: Arc::new(IndexWorkerRef {
                receiver: Mutex::new(receiver),
                handler,
                shutdown: Notify::new(),
                dispatcher_handle: RwLock::new(None),
            }),
        }
    }

    /// Spawns the dispatcher task. Calling it while already running logs a warning.
    pub async fn start(&self) {
        let mut handle = self.inner.dispatcher_handle.write().await;

        if handle.is_some() {
            tracing::warn!("Index worker is already running");
            return;
        }

        let inner = Arc::clone(&self.inner);
        *handle = Some(tokio::spawn(async move {
            tracing::info!("Index worker started");

            loop {
                let job = tokio::select! {
                    biased;

                    _ = inner.shutdown.notified() => {
                        tracing::debug!("Index worker received shutdown signal");
                        break;
                    }

                    job = async { inner.receiver.lock().await.recv().await } => job,
                };

                match job {
                    Some(job) => Self::execute_job(&inner.handler, job).await,
                    None => {
                        tracing::info!("Index queue closed, no more jobs will arrive");
                        break;
                    }
                }
            }

            tracing::info!("Index worker stopped");
        }));
    }

    /// Signals the dispatcher to stop after its current job and waits for it.
    pub async fn stop(&self) {
        let Some(handle) = self.inner.dispatcher_handle.write().await.take() else {
            tracing::debug!("Index worker is already stopped");
            return;
        };

        self.inner.shutdown.notify_one();

        match tokio::time::timeout(SHUTDOWN_TIMEOUT, handle).await {
            Ok(Ok(())) => tracing::debug!("Index worker stopped cleanly"),
            Ok(Err(e)) => tracing::error!("Index worker panicked: {:?}", e),
            Err(_) => tracing::warn!("Index worker did not stop within timeout"),
        }
    }

    pub async fn is_running(&self) -> bool {
        self.inner.dispatcher_handle.read().await.is_some()
    }

    /// Processes every job currently queued on the calling task and returns how many ran.
    ///
    /// Returns 0 without touching the queue while the dispatcher is running, since it holds
    /// the receiver until the next job arrives.
    pub async fn drain(&self) -> usize {
        if self.is_running().await {
            tracing::warn!("Index worker is running, drain skipped");
            return 0;
        }

        let mut receiver = self.inner.receiver.lock().await;

        let mut processed = 0;
        while let Ok(job) = receiver.try_recv() {
            Self::execute_job(&self.inner.handler, job).await;
            processed += 1;
        }

        processed
    }

    async fn execute_job(handler: &IndexJobHandler, job: IndexJob) {
        match tokio::time::timeout(JOB_TIMEOUT, handler.handle(&job)).await {
            Ok(Ok(report)) => {
                tracing::debug!("Job completed: {}, {:?}", job, report);
            }
            Ok(Err(e)) => {
                tracing::error!("Job failed: {}, error: {:?}", job, e);
            }
            Err(_) => {
                tracing::error!(
                    "Job timed out after {} seconds: {}",
                    JOB_TIMEOUT.as_secs(),
                    job
                );
            }
        }
    }
}
