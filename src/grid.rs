use crate::{util, Error, OffsetBound};

/// Frequencies `k * step` for `k` in `k_min..=k_max`. Frequencies are derived
/// from the integer `k`, which keeps them exact multiples of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyGrid {
    k_min: u64,
    len: usize,
    step: f64,
}

impl FrequencyGrid {
    /// `min` and `max` must be positive, finite multiples of `step` with
    /// `min <= max`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, Error> {
        for (name, value) in [("min_f", min), ("max_f", max), ("step_f", step)] {
            if !value.is_finite() {
                return Err(Error::NonFinite { name });
            }
        }
        if step <= 0.0 {
            return Err(Error::NonPositiveStep {
                name: "step_f",
                value: step,
            });
        }
        if min > max {
            return Err(Error::InvertedRange { min, max });
        }
        if min <= 0.0 {
            return Err(Error::NonPositiveFrequency { value: min });
        }

        if max / step >= util::MAX_GRID_INDEX {
            return Err(Error::GridTooLarge {
                name: "frequency grid",
                size: max / step,
            });
        }

        let k_min = util::multiple_of(min, step).ok_or(Error::NotAMultiple {
            name: "min_f",
            value: min,
            step,
        })?;
        let k_max = util::multiple_of(max, step).ok_or(Error::NotAMultiple {
            name: "max_f",
            value: max,
            step,
        })?;
        // min_f is a tiny positive number that rounds to 0 * step
        if k_min == 0 {
            return Err(Error::NonPositiveFrequency { value: min });
        }

        Ok(Self {
            k_min,
            len: (k_max - k_min) as usize + 1,
            step,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn get(&self, i: usize) -> f64 {
        (self.k_min + i as u64) as f64 * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.get(i))
    }
}

/// Phase offsets `i * step` from 0 up to one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetGrid {
    len: usize,
    step: f64,
}

impl OffsetGrid {
    pub fn new(period: f64, step: f64, bound: OffsetBound) -> Result<Self, Error> {
        if !step.is_finite() {
            return Err(Error::NonFinite { name: "step_o" });
        }
        if step <= 0.0 {
            return Err(Error::NonPositiveStep {
                name: "step_o",
                value: step,
            });
        }

        let inclusive = bound == OffsetBound::Inclusive;
        let len = util::grid_len(0.0, step, period, inclusive).ok_or(Error::GridTooLarge {
            name: "offset grid",
            size: period / step,
        })?;

        Ok(Self { len, step })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, i: usize) -> f64 {
        i as f64 * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.get(i))
    }
}
