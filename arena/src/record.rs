use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a match job reports back: the raw (possibly malformed) payload
/// and the indices of the two agents that played.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub payload: Value,
    pub agent_a: usize,
    pub agent_b: usize,
}
