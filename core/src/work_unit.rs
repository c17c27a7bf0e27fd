use serde::{Deserialize, Serialize};

/// One partitioned slice of the series, consumed by a single worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUnit {
    pub index: usize,
    pub chunk_size: usize,
}

impl WorkUnit {
    pub fn new(index: usize, chunk_size: usize) -> Self {
        Self { index, chunk_size }
    }

    /// Half-open range of series terms this unit covers
    ///
    /// Computed in u64 so `index * chunk_size` cannot wrap on 32-bit hosts.
    pub fn range(&self) -> std::ops::Range<u64> {
        let start = self.index as u64 * self.chunk_size as u64;
        start..start + self.chunk_size as u64
    }
}

/// Partial sum over one work unit's range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialResult {
    pub value: f64,
}
