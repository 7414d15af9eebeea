use crate::{Error, Kernel, PulseTrain};

/// Sum over all events of the squared distance to the nearest tick of
/// `train`. Divide by `events.len()` for the mean squared deviation.
///
/// `events` must be sorted ascending for [`Kernel::Sweep`], the other kernels
/// don't depend on the order. All kernels accumulate in event order and find
/// the same minimal distance per event, so their results are bit-identical.
pub fn sum_sqr_deviation(events: &[f64], train: &PulseTrain, kernel: Kernel) -> Result<f64, Error> {
    Ok(match kernel {
        Kernel::Analytic => analytic(events, train),
        Kernel::Sweep => sweep(events, train),
        Kernel::BruteForce => brute_force(events, &train.to_vec()?),
    })
}

fn analytic(events: &[f64], train: &PulseTrain) -> f64 {
    let last = train.len() - 1;

    events
        .iter()
        .map(|&event| {
            // Rounding can be off by one in either direction, so also look at
            // the neighbours instead of trusting the estimated index
            let idx = ((event - train.first()) / train.period())
                .round()
                .clamp(0.0, last as f64) as usize;
            let lo = idx.saturating_sub(1);
            let hi = (idx + 1).min(last);

            let dev = (lo..=hi)
                .map(|i| (train.tick(i) - event).abs())
                .fold(f64::INFINITY, f64::min);
            dev * dev
        })
        .sum()
}

fn sweep(events: &[f64], train: &PulseTrain) -> f64 {
    let last = train.len() - 1;
    // Index of the last tick that is <= the current event (or 0)
    let mut i = 0;

    events
        .iter()
        .map(|&event| {
            while i < last && train.tick(i + 1) <= event {
                i += 1;
            }

            let below = (train.tick(i) - event).abs();
            let dev = if i < last {
                below.min((train.tick(i + 1) - event).abs())
            } else {
                below
            };
            dev * dev
        })
        .sum()
}

fn brute_force(events: &[f64], ticks: &[f64]) -> f64 {
    events
        .iter()
        .map(|&event| {
            let dev = ticks
                .iter()
                .map(|&tick| (tick - event).abs())
                .fold(f64::INFINITY, f64::min);
            dev * dev
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::sum_sqr_deviation;
    use crate::{Kernel, PulseTrain};
    use assert2::{check, let_assert};

    const KERNELS: [Kernel; 3] = [Kernel::Analytic, Kernel::Sweep, Kernel::BruteForce];

    #[test]
    fn events_on_ticks() {
        let events = [0.0, 1.0, 2.0, 3.0];
        let_assert!(Ok(train) = PulseTrain::new(-2.0, 0.0, 1.0, 4.0));
        for kernel in KERNELS {
            let_assert!(Ok(sum) = sum_sqr_deviation(&events, &train, kernel));
            check!(sum == 0.0, "{kernel:?}");
        }
    }

    #[test]
    fn half_period_off() {
        let events = [0.0, 1.0, 2.0, 3.0];
        let_assert!(Ok(train) = PulseTrain::new(-2.0, 0.5, 1.0, 4.0));
        for kernel in KERNELS {
            let_assert!(Ok(sum) = sum_sqr_deviation(&events, &train, kernel));
            check!(sum == 4.0 * 0.25, "{kernel:?}");
        }
    }

    #[test]
    fn events_outside_train() {
        // Not reachable from the grid search, but the kernels must still agree
        let events = [-3.0, 0.2, 10.0];
        let_assert!(Ok(train) = PulseTrain::new(0.0, 0.0, 1.0, 5.0));
        for kernel in KERNELS {
            let_assert!(Ok(sum) = sum_sqr_deviation(&events, &train, kernel));
            check!((sum - (9.0 + 0.04 + 25.0)).abs() < 1e-12, "{kernel:?}");
        }
    }

    #[test]
    fn random_kernels_identical() {
        for _ in 0..500 {
            let n = rand::random::<usize>() % 50 + 2;
            let mut events: Vec<f64> = (0..n).map(|_| rand::random::<f64>() * 20.0).collect();
            events.sort_by(f64::total_cmp);

            let period = rand::random::<f64>() * 3.0 + 0.01;
            let start = period * ((events[0] - 2.0 * period) / period).floor();
            let offset = rand::random::<f64>() * period;
            let stop = events[n - 1] + period;
            let_assert!(Ok(train) = PulseTrain::new(start, offset, period, stop));

            let_assert!(Ok(reference) = sum_sqr_deviation(&events, &train, Kernel::BruteForce));
            let_assert!(Ok(analytic) = sum_sqr_deviation(&events, &train, Kernel::Analytic));
            let_assert!(Ok(sweep) = sum_sqr_deviation(&events, &train, Kernel::Sweep));

            check!(analytic.to_bits() == reference.to_bits());
            check!(sweep.to_bits() == reference.to_bits());
            // Every event has a tick within half a period
            check!(reference <= n as f64 * period * period / 4.0 * (1.0 + 1e-9));
        }
    }
}
