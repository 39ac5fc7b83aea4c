//! Background worker pool for asynchronous fills.
//!
//! A single pool serves the whole process. It is started on first use and
//! lives until the process exits; jobs run to completion and cannot be
//! cancelled.

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Number of worker threads in the fill pool.
pub const FILL_WORKERS: usize = 2;

static EXECUTOR: OnceCell<FillExecutor> = OnceCell::new();

/// Callback invoked after a background fill completes.
pub type OnFillCompleted = Box<dyn FnOnce() + Send + 'static>;

/// Errors from the asynchronous fill surface.
#[derive(Debug, thiserror::Error)]
pub enum FillError {
    /// The worker pool could not be started
    #[error("Failed to start fill worker pool: {0}")]
    Executor(#[from] std::io::Error),
}

/// Fixed-size pool running fill jobs off the caller's thread.
pub struct FillExecutor {
    runtime: Runtime,
}

impl FillExecutor {
    /// Get the process-wide pool, starting it on first use.
    pub fn global() -> Result<&'static FillExecutor, FillError> {
        EXECUTOR.get_or_try_init(|| {
            debug!(workers = FILL_WORKERS, "Starting fill worker pool");
            Self::with_workers(FILL_WORKERS)
        })
    }

    fn with_workers(workers: usize) -> Result<Self, FillError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name("fill-worker")
            .build()?;
        Ok(Self { runtime })
    }

    /// Queue a job. Returns immediately; the job runs on a pool worker.
    pub fn submit<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // Dropping the handle detaches the task.
        let _ = self.runtime.spawn(async move { job() });
    }
}
