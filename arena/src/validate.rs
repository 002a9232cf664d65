use cluster::{JobHandle, JobStatus};
use game::Outcome;

use super::MatchRecord;

/// The validation gate: a job may only influence ratings if it succeeded
/// and its payload parses to a well-formed outcome. Everything else is
/// silently excluded -- failed jobs are not retried.
pub fn validated_outcome<H>(handle: &H) -> Option<(Outcome, usize, usize)>
where
    H: JobHandle<MatchRecord>,
{
    if handle.status() != JobStatus::Succeeded {
        return None;
    }

    let record = handle.result()?;
    let outcome = Outcome::from_payload(&record.payload)?;

    Some((outcome, record.agent_a, record.agent_b))
}

pub fn valid_result<H>(handle: &H) -> bool
where
    H: JobHandle<MatchRecord>,
{
    validated_outcome(handle).is_some()
}
