//! Exact stepping through representable values.

use crate::ulp::UlpFloat;

/// Stepping direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward +∞.
    Up,
    /// Toward −∞.
    Down,
}

/// Advance `start` by `count` representable values toward `direction`.
///
/// Uses `next_up`/`next_down` one step at a time, so the result is exact.
/// Zero is a single point: stepping up from `-TINY` reaches `-0.0`, the next
/// step reaches `+TINY`. Once the value stops moving (an infinity stepped
/// outward, or NaN) the remaining steps are skipped.
pub fn step<F: UlpFloat>(start: F, direction: Direction, count: u64) -> F {
    let mut value = start;
    for _ in 0..count {
        let next = match direction {
            Direction::Up => value.next_up(),
            Direction::Down => value.next_down(),
        };
        if next.is_nan() || next == value {
            break;
        }
        value = next;
    }
    value
}
