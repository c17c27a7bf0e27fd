use std::time::Duration;

/// Outcome of one calculation run, recorded by the master when it stops
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiEstimate {
    pub value: f64,
    pub elapsed: Duration,
}
