// Grids are always generated as `origin + i * step` from an integer index,
// never by accumulating `step`, so the same index always yields the same value.

/// Largest grid index that `i as f64` still represents exactly (2^53).
pub const MAX_GRID_INDEX: f64 = 9_007_199_254_740_992.0;

/// Number of grid points `origin + i * step` (i = 0, 1, ...) that lie below
/// `limit`, or at it if `inclusive`. Returns `Some(0)` if even `origin` is
/// past it and `None` if the grid has more than [`MAX_GRID_INDEX`] points.
pub fn grid_len(origin: f64, step: f64, limit: f64, inclusive: bool) -> Option<usize> {
    let within = |i: usize| {
        let x = origin + i as f64 * step;
        if inclusive {
            x <= limit
        } else {
            x < limit
        }
    };

    if !within(0) {
        return Some(0);
    }

    // The division only gives an estimate, fix it up with the exact predicate
    let estimate = ((limit - origin) / step).floor();
    if estimate.is_nan() || estimate >= MAX_GRID_INDEX {
        return None;
    }
    let mut n = estimate as usize + 1;
    while n > 1 && !within(n - 1) {
        n -= 1;
    }
    while within(n) {
        n += 1;
    }
    Some(n)
}

/// Returns `k` if `value` is `k * step` for a non-negative integer `k`, up to
/// a relative tolerance on the ratio. Rounds instead of truncating because e.g.
/// `0.3 / 0.1` evaluates to `2.9999999999999996`. Ratios of 2^53 and more
/// are rejected, not every integer is representable there.
pub fn multiple_of(value: f64, step: f64) -> Option<u64> {
    const REL_TOL: f64 = 1e-9;

    let ratio = value / step;
    if !ratio.is_finite() || ratio < -0.5 || ratio >= MAX_GRID_INDEX {
        return None;
    }
    let k = ratio.round();
    if (ratio - k).abs() <= REL_TOL * k.abs().max(1.0) {
        Some(k as u64)
    } else {
        None
    }
}
