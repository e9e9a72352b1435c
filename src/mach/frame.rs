use super::Address;

/// Calls and loops share one stack so their nesting order is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Call {
        /// The DO statement. Control returns to the statement after it.
        origin: Address,
        target: f64,
        group_only: bool,
    },
    Loop {
        /// The FOR statement itself. The body starts right after it.
        head: Address,
        begin: f64,
        end: f64,
        step: f64,
    },
}

impl Frame {
    /// Whether a loop with this index still has iterations to run. A
    /// zero step never does.
    pub fn in_range(index: f64, end: f64, step: f64) -> bool {
        (step < 0.0 && index >= end) || (step > 0.0 && index <= end)
    }
}
