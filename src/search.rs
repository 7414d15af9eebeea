use tracing::{debug, info};

use crate::{
    deviation::sum_sqr_deviation, grid::OffsetGrid, Error, Fit, PulseTrain, RmsdCurve,
    SearchConfig,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fit a periodic pulse train to `events` for every frequency of the grid
/// described by `config` and report the smallest achievable RMSD per frequency.
///
/// `events` must contain at least two finite timestamps in ascending order.
/// All parameters are checked before the search starts; on error nothing is
/// returned.
pub fn grid_search(events: &[f64], config: &SearchConfig) -> Result<RmsdCurve, Error> {
    check_events(events)?;
    let grid = config.validate()?;

    info!(
        events = events.len(),
        frequencies = grid.len(),
        step_o = config.step_o,
        kernel = ?config.kernel,
        "starting pulse grid search"
    );

    let mut curve = RmsdCurve::try_with_capacity(grid.len())?;

    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            let fits: Vec<Fit> = (0..grid.len())
                .into_par_iter()
                .map(|i| fit_frequency(events, grid.get(i), config))
                .collect::<Result<_, _>>()?;
            fits.into_iter().for_each(|fit| curve.push(fit));
        }
    }

    // Sequential path, the only one without the `parallel` feature
    if curve.is_empty() {
        for freq in grid.iter() {
            curve.push(fit_frequency(events, freq, config)?);
        }
    }

    if let Some(best) = curve.best() {
        info!(
            freq = best.freq,
            rmsd = best.rmsd,
            offset = best.offset,
            "pulse grid search finished"
        );
    }

    Ok(curve)
}

/// The classic five-parameter interface: returns `(freq, rmsd)`.
pub fn pulse_gat(
    events: &[f64],
    step_f: f64,
    step_o: f64,
    min_f: f64,
    max_f: f64,
) -> Result<(Vec<f64>, Vec<f64>), Error> {
    let config = SearchConfig::new(min_f, max_f, step_f, step_o);
    Ok(grid_search(events, &config)?.into_parts())
}

fn check_events(events: &[f64]) -> Result<(), Error> {
    if events.len() < 2 {
        return Err(Error::InsufficientEvents {
            count: events.len(),
        });
    }
    if !events.iter().all(|e| e.is_finite()) {
        return Err(Error::NonFinite { name: "events" });
    }
    if let Some(pos) = events.windows(2).position(|w| w[1] < w[0]) {
        return Err(Error::UnsortedEvents { index: pos + 1 });
    }
    Ok(())
}

/// Sweep all phase offsets for a single frequency and keep the best one.
fn fit_frequency(events: &[f64], freq: f64, config: &SearchConfig) -> Result<Fit, Error> {
    let period = 1.0 / freq;
    // Align the train to the period grid and pad it so every event has a
    // tick on both sides, whatever the offset
    let start = period * ((events[0] - 2.0 * period) / period).floor();
    let stop = events[events.len() - 1] + period;

    let offsets = OffsetGrid::new(period, config.step_o, config.offset_bound)?;
    let n = events.len() as f64;

    let mut best_msd = f64::INFINITY;
    let mut best_offset = 0.0;
    for offset in offsets.iter() {
        let train = PulseTrain::new(start, offset, period, stop)?;
        let msd = sum_sqr_deviation(events, &train, config.kernel)? / n;
        if msd < best_msd {
            best_msd = msd;
            best_offset = offset;
        }
    }

    let fit = Fit {
        freq,
        rmsd: best_msd.sqrt(),
        offset: best_offset,
    };
    debug!(
        freq,
        rmsd = fit.rmsd,
        offset = fit.offset,
        offsets = offsets.len(),
        "fitted frequency"
    );
    Ok(fit)
}
