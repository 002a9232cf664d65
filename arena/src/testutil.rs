use std::sync::{Arc, Mutex};

use cluster::{JobHandle, JobStatus};
use serde_json::Value;

use super::MatchRecord;

/// Hand-resolvable job handle for exercising the tracker and validator
/// without a pool.
#[derive(Clone)]
pub struct FakeHandle {
    state: Arc<Mutex<(JobStatus, Option<MatchRecord>)>>,
}

impl FakeHandle {
    pub fn pending() -> Self {
        Self {
            state: Arc::new(Mutex::new((JobStatus::Pending, None))),
        }
    }

    pub fn succeeded(payload: Value, agent_a: usize, agent_b: usize) -> Self {
        let handle = Self::pending();
        handle.resolve_ok(payload, agent_a, agent_b);
        handle
    }

    pub fn failed() -> Self {
        let handle = Self::pending();
        handle.resolve_err();
        handle
    }

    pub fn resolve_ok(&self, payload: Value, agent_a: usize, agent_b: usize) {
        let mut state = self.state.lock().unwrap();
        *state = (
            JobStatus::Succeeded,
            Some(MatchRecord {
                payload,
                agent_a,
                agent_b,
            }),
        );
    }

    pub fn resolve_err(&self) {
        let mut state = self.state.lock().unwrap();
        *state = (JobStatus::Failed, None);
    }
}

impl JobHandle<MatchRecord> for FakeHandle {
    fn status(&self) -> JobStatus {
        self.state.lock().unwrap().0
    }

    fn result(&self) -> Option<MatchRecord> {
        self.state.lock().unwrap().1.clone()
    }
}
