/// Cyclic cursor over a fixed-size worker pool
///
/// The router's only state: the n-th selection is `n mod pool_size`.
#[derive(Debug)]
pub struct RoundRobin {
    next: usize,
    pool_size: usize,
}

impl RoundRobin {
    /// `pool_size` must be positive; validated job parameters guarantee it
    pub fn new(pool_size: usize) -> Self {
        Self { next: 0, pool_size }
    }

    /// Index of the pool member that receives the next dispatch
    pub fn select(&mut self) -> usize {
        let selected = self.next;
        self.next = (self.next + 1) % self.pool_size;
        selected
    }
}
