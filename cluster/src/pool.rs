use anyhow::Result;

/// Lifecycle of a submitted job. Transitions Pending -> Succeeded or
/// Pending -> Failed exactly once and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending)
    }
}

/// Reference to a submitted job's asynchronous execution and result.
pub trait JobHandle<T> {
    fn status(&self) -> JobStatus;

    /// The job's payload. `Some` only once the job has succeeded.
    fn result(&self) -> Option<T>;
}

/// Minimal submit/status/result contract over a pool of workers. Keeping
/// this seam narrow lets the orchestration run unchanged against an
/// in-process pool or a remote scheduler client.
pub trait WorkerPool<T: Send + 'static> {
    type Handle: JobHandle<T>;

    /// Enqueues a job without blocking and returns its handle immediately.
    fn submit<F>(&self, job: F) -> Self::Handle
    where
        F: FnOnce() -> Result<T> + Send + 'static;
}
