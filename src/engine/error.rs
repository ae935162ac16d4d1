#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The eligible slots could not cover the requested amount. Partial
    /// reservations made during the scan stay committed; `unfilled` is what
    /// was still missing when the scan ran out of pool.
    InsufficientCapacity { requested: u32, unfilled: u32 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InsufficientCapacity { requested, unfilled } => {
                write!(
                    f,
                    "insufficient capacity: requested {requested}, {unfilled} could not be reserved"
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
