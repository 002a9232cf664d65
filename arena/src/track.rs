use std::io::Write;
use std::time::{Duration, Instant};

use cluster::{JobHandle, JobStatus};
use serde::Serialize;

use super::{valid_result, MatchRecord};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobCounts {
    pub pending: usize,
    pub completed: usize,
    pub error: usize,
}

impl JobCounts {
    pub fn terminal(&self) -> usize {
        self.completed + self.error
    }
}

/// One poll over the outstanding handles: still-pending jobs, jobs with a
/// validated result, and everything else (failed or malformed).
pub fn count_jobs<H>(handles: &[H]) -> JobCounts
where
    H: JobHandle<MatchRecord>,
{
    let mut counts = JobCounts::default();

    for handle in handles {
        if handle.status() == JobStatus::Pending {
            counts.pending += 1;
        } else if valid_result(handle) {
            counts.completed += 1;
        } else {
            counts.error += 1;
        }
    }

    counts
}

/// Polls until every job reaches a terminal state, refreshing a progress
/// line in place. The sleep between polls is the pipeline's only
/// suspension point. There is no deadline: the loop waits for 100% of the
/// handles, and a straggler holds it open until it resolves.
pub async fn track_jobs<H>(handles: &[H], interval: Duration) -> JobCounts
where
    H: JobHandle<MatchRecord>,
{
    let start = Instant::now();

    loop {
        let counts = count_jobs(handles);

        print!(
            "\r{}/{} - Pending: {}, Error: {}, Completed: {}, Elapsed time: {:.2}",
            counts.terminal(),
            handles.len(),
            counts.pending,
            counts.error,
            counts.completed,
            start.elapsed().as_secs_f64()
        );
        std::io::stdout().flush().ok();

        if counts.pending == 0 {
            println!();
            return counts;
        }

        tokio::time::sleep(interval).await;
    }
}
