use crate::{util, Error};

/// A perfectly periodic pulse train: ticks at `first + i * period` for
/// `i in 0..len()`. Ticks are computed on demand, so a train never allocates
/// unless it is explicitly materialized with [`PulseTrain::to_vec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseTrain {
    first: f64,
    period: f64,
    len: usize,
}

impl PulseTrain {
    /// Ticks start at `start + offset` and continue while they are `<= stop`.
    /// Returns an error if the train would be empty, which can't happen for
    /// `start + offset <= stop`.
    pub fn new(start: f64, offset: f64, period: f64, stop: f64) -> Result<Self, Error> {
        if !period.is_finite() || period <= 0.0 {
            return Err(Error::NonPositiveStep {
                name: "period",
                value: period,
            });
        }

        let first = start + offset;
        let len = util::grid_len(first, period, stop, true).ok_or(Error::GridTooLarge {
            name: "pulse train",
            size: (stop - first) / period,
        })?;
        if len == 0 {
            return Err(Error::EmptyPulseTrain { first, stop });
        }

        Ok(Self { first, period, len })
    }

    /// Number of ticks `<= stop`, that is `floor((stop - first) / period) + 1`.
    /// When `stop` falls exactly on a tick this is one more than
    /// `ceil((stop - first) / period)`; that tick is included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false, an empty train can't be constructed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn first(&self) -> f64 {
        self.first
    }

    pub fn last(&self) -> f64 {
        self.tick(self.len - 1)
    }

    /// Time of tick number `i`. Not bounds checked: indices past the end
    /// simply continue the train.
    pub fn tick(&self, i: usize) -> f64 {
        self.first + i as f64 * self.period
    }

    pub fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.tick(i))
    }

    /// Allocate all ticks. Fails instead of aborting if the train is too long
    /// to fit in memory.
    pub fn to_vec(&self) -> Result<Vec<f64>, Error> {
        let mut ticks = Vec::new();
        ticks.try_reserve_exact(self.len)?;
        ticks.extend(self.ticks());
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::PulseTrain;
    use crate::{Error, ErrorKind};
    use assert2::{check, let_assert};

    #[test]
    fn ticks_cover_range() {
        let_assert!(Ok(train) = PulseTrain::new(-2.0, 0.5, 1.0, 4.0));
        check!(train.len() == 6);
        check!(train.first() == -1.5);
        check!(train.last() == 3.5);
        let_assert!(Ok(ticks) = train.to_vec());
        check!(ticks == [-1.5, -0.5, 0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn stop_is_inclusive() {
        let_assert!(Ok(train) = PulseTrain::new(-2.0, 0.0, 1.0, 4.0));
        check!(train.len() == 7);
        check!(train.last() == 4.0);
    }

    #[test]
    fn random_trains() {
        for _ in 0..1000 {
            let period = rand::random::<f64>() * 2.0 + 1e-3;
            let start = rand::random::<f64>() * 100.0 - 50.0;
            let offset = rand::random::<f64>() * period;
            let stop = start + offset + rand::random::<f64>() * 100.0;

            let_assert!(Ok(train) = PulseTrain::new(start, offset, period, stop));
            check!(train.first() == start + offset);
            check!(train.last() <= stop);
            check!(train.tick(train.len()) > stop);
            check!(train.ticks().zip(train.ticks().skip(1)).all(|(a, b)| a < b));
        }
    }

    #[test]
    fn rejects_bad_input() {
        let_assert!(Err(err) = PulseTrain::new(0.0, 0.0, 0.0, 1.0));
        check!(err.kind() == ErrorKind::Domain);
        let_assert!(Err(err) = PulseTrain::new(5.0, 0.0, 1.0, 1.0));
        check!(err.kind() == ErrorKind::Domain);
    }

    #[test]
    fn too_many_ticks() {
        let_assert!(Err(err) = PulseTrain::new(-2.0, 0.0, 1.0, 1e20));
        let_assert!(Error::GridTooLarge { name: "pulse train", .. } = &err);
        check!(err.kind() == ErrorKind::Domain);
    }
}
