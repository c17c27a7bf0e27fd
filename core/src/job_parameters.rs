use serde::{Deserialize, Serialize};

use crate::work_unit::WorkUnit;

/// Parameters of one calculation run, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParameters {
    pub worker_count: usize,
    pub message_count: usize,
    pub elements_per_message: usize,
}

impl JobParameters {
    pub fn new(
        worker_count: usize,
        message_count: usize,
        elements_per_message: usize,
    ) -> Result<Self, ParameterError> {
        Self {
            worker_count,
            message_count,
            elements_per_message,
        }
        .validate()
    }

    /// Re-checks a parameter set built without `new`, e.g. one
    /// deserialized from a config file
    pub fn validate(self) -> Result<Self, ParameterError> {
        if self.worker_count == 0 {
            return Err(ParameterError::ZeroWorkers);
        }
        if self.message_count == 0 {
            return Err(ParameterError::ZeroMessages);
        }
        if self.elements_per_message == 0 {
            return Err(ParameterError::ZeroElementsPerMessage);
        }
        Ok(self)
    }

    /// Total number of series terms covered by one run
    pub fn total_elements(&self) -> u64 {
        self.message_count as u64 * self.elements_per_message as u64
    }

    /// All work units of one run, in dispatch order
    pub fn work_units(&self) -> impl Iterator<Item = WorkUnit> {
        let chunk_size = self.elements_per_message;
        (0..self.message_count).map(move |index| WorkUnit::new(index, chunk_size))
    }
}

/// Rejected job parameters
///
/// A zero anywhere would make the pipeline hang instead of finishing,
/// so construction fails fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    ZeroWorkers,
    ZeroMessages,
    ZeroElementsPerMessage,
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterError::ZeroWorkers => write!(f, "worker count must be positive"),
            ParameterError::ZeroMessages => write!(f, "message count must be positive"),
            ParameterError::ZeroElementsPerMessage => {
                write!(f, "elements per message must be positive")
            }
        }
    }
}

impl std::error::Error for ParameterError {}
