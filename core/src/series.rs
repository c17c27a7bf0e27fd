use crate::work_unit::{PartialResult, WorkUnit};

/// Partial sum of the Leibniz series over one work unit's range
///
/// Accumulates `4 * (-1)^k / (2k + 1)` for every k in the range, with an
/// explicit loop so large chunk sizes cannot grow the stack.
pub fn leibniz_partial_sum(unit: WorkUnit) -> PartialResult {
    let mut sum = 0.0_f64;
    for k in unit.range() {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += 4.0 * sign / (2 * k + 1) as f64;
    }
    PartialResult { value: sum }
}
