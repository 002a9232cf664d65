use serde_json::Value;

/// A well-formed match result. On the wire this is `0` (agent A wins),
/// `1` (agent B wins) or `null` (tie); anything else is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AgentA,
    AgentB,
    Tie,
}

impl Outcome {
    pub fn from_payload(payload: &Value) -> Option<Outcome> {
        match payload {
            Value::Null => Some(Outcome::Tie),
            Value::Number(num) => match num.as_i64() {
                Some(0) => Some(Outcome::AgentA),
                Some(1) => Some(Outcome::AgentB),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn to_payload(self) -> Value {
        match self {
            Outcome::AgentA => Value::from(0),
            Outcome::AgentB => Value::from(1),
            Outcome::Tie => Value::Null,
        }
    }

    /// The opposite decisive result. Ties have no opposite.
    pub fn flipped(self) -> Outcome {
        match self {
            Outcome::AgentA => Outcome::AgentB,
            Outcome::AgentB => Outcome::AgentA,
            Outcome::Tie => Outcome::Tie,
        }
    }
}
