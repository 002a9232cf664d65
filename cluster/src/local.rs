use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::Result;
use crossbeam::channel::{unbounded, Receiver, Sender};
use log::debug;
use parking_lot::Mutex;

use super::{JobHandle, JobStatus, WorkerPool};

type Job<T> = Box<dyn FnOnce() -> Result<T> + Send>;

/// A worker pool backed by in-process threads. Jobs are pulled from a
/// shared queue; each job's state makes a single Pending -> terminal
/// transition that its handle observes.
pub struct LocalPool<T> {
    job_tx: Option<Sender<(Job<T>, Arc<JobState<T>>)>>,
    workers: Vec<JoinHandle<()>>,
}

impl<T: Clone + Send + 'static> LocalPool<T> {
    /// Panics if `num_workers` is zero: a pool with no workers would
    /// leave every submitted job pending forever.
    pub fn new(num_workers: usize) -> Self {
        assert!(num_workers >= 1, "pool needs at least one worker");

        let (job_tx, job_rx) = unbounded::<(Job<T>, Arc<JobState<T>>)>();

        let workers = (0..num_workers)
            .map(|worker_num| {
                let job_rx = job_rx.clone();
                std::thread::spawn(move || run_worker(worker_num, job_rx))
            })
            .collect();

        Self {
            job_tx: Some(job_tx),
            workers,
        }
    }

    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }
}

impl<T: Clone + Send + 'static> WorkerPool<T> for LocalPool<T> {
    type Handle = LocalHandle<T>;

    fn submit<F>(&self, job: F) -> Self::Handle
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let state = Arc::new(JobState::new());

        // A job that never reaches the queue must still reach a terminal
        // state, or the tracker would wait on it forever.
        match self.job_tx.as_ref() {
            Some(job_tx) if job_tx.send((Box::new(job), state.clone())).is_ok() => {}
            _ => state.fail(),
        }

        LocalHandle { state }
    }
}

impl<T> Drop for LocalPool<T> {
    fn drop(&mut self) {
        // Closing the channel lets the workers drain the queue and exit.
        self.job_tx.take();

        for worker in self.workers.drain(..) {
            worker.join().ok();
        }
    }
}

fn run_worker<T>(worker_num: usize, job_rx: Receiver<(Job<T>, Arc<JobState<T>>)>) {
    while let Ok((job, state)) = job_rx.recv() {
        match job() {
            Ok(payload) => state.succeed(payload),
            Err(err) => {
                debug!("Worker {}: job failed: {}", worker_num, err);
                state.fail();
            }
        }
    }
}

pub struct LocalHandle<T> {
    state: Arc<JobState<T>>,
}

impl<T> Clone for LocalHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Clone> JobHandle<T> for LocalHandle<T> {
    fn status(&self) -> JobStatus {
        self.state.inner.lock().status
    }

    fn result(&self) -> Option<T> {
        self.state.inner.lock().payload.clone()
    }
}

struct JobState<T> {
    inner: Mutex<JobStateInner<T>>,
}

struct JobStateInner<T> {
    status: JobStatus,
    payload: Option<T>,
}

impl<T> JobState<T> {
    fn new() -> Self {
        Self {
            inner: Mutex::new(JobStateInner {
                status: JobStatus::Pending,
                payload: None,
            }),
        }
    }

    fn succeed(&self, payload: T) {
        let mut inner = self.inner.lock();
        debug_assert_eq!(inner.status, JobStatus::Pending);
        inner.status = JobStatus::Succeeded;
        inner.payload = Some(payload);
    }

    fn fail(&self) {
        let mut inner = self.inner.lock();
        debug_assert_eq!(inner.status, JobStatus::Pending);
        inner.status = JobStatus::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::time::{Duration, Instant};

    fn wait_terminal<T: Clone>(handle: &LocalHandle<T>) -> JobStatus {
        let deadline = Instant::now() + Duration::from_secs(5);

        loop {
            let status = handle.status();
            if status.is_terminal() {
                return status;
            }

            assert!(Instant::now() < deadline, "job never reached a terminal state");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_successful_job_yields_result() {
        let pool = LocalPool::new(2);
        let handle = pool.submit(|| Ok(7_usize));

        assert_eq!(wait_terminal(&handle), JobStatus::Succeeded);
        assert_eq!(handle.result(), Some(7));
    }

    #[test]
    fn test_failed_job_has_no_result() {
        let pool = LocalPool::<usize>::new(2);
        let handle = pool.submit(|| Err(anyhow!("boom")));

        assert_eq!(wait_terminal(&handle), JobStatus::Failed);
        assert_eq!(handle.result(), None);
    }

    #[test]
    #[should_panic(expected = "at least one worker")]
    fn test_pool_without_workers_is_rejected() {
        LocalPool::<usize>::new(0);
    }

    #[test]
    fn test_jobs_outnumbering_workers_all_complete() {
        let pool = LocalPool::new(2);
        let handles: Vec<_> = (0..20_usize).map(|i| pool.submit(move || Ok(i))).collect();

        for (i, handle) in handles.iter().enumerate() {
            assert_eq!(wait_terminal(handle), JobStatus::Succeeded);
            assert_eq!(handle.result(), Some(i));
        }
    }
}
