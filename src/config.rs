use crate::{grid::FrequencyGrid, Error, Kernel, OffsetBound};

/// Parameters of a grid search. `min_f` and `max_f` must be integer multiples
/// of `step_f`; frequencies are tested from `min_f` to `max_f` inclusive.
/// Phase offsets are tested in `step_o` increments from 0 to one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub min_f: f64,
    pub max_f: f64,
    pub step_f: f64,
    pub step_o: f64,
    pub kernel: Kernel,
    pub offset_bound: OffsetBound,
    /// Evaluate frequencies on the rayon thread pool. Ignored if the crate
    /// is built without the `parallel` feature. Results don't depend on it.
    pub parallel: bool,
}

impl SearchConfig {
    pub fn new(min_f: f64, max_f: f64, step_f: f64, step_o: f64) -> Self {
        Self {
            min_f,
            max_f,
            step_f,
            step_o,
            kernel: Kernel::default(),
            offset_bound: OffsetBound::default(),
            parallel: true,
        }
    }

    pub fn with_kernel(self, kernel: Kernel) -> Self {
        Self { kernel, ..self }
    }

    pub fn with_offset_bound(self, offset_bound: OffsetBound) -> Self {
        Self {
            offset_bound,
            ..self
        }
    }

    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    /// Checks the parameters without running a search. Returns the frequency
    /// grid they describe.
    pub fn validate(&self) -> Result<FrequencyGrid, Error> {
        let grid = FrequencyGrid::new(self.min_f, self.max_f, self.step_f)?;
        if !self.step_o.is_finite() {
            return Err(Error::NonFinite { name: "step_o" });
        }
        if self.step_o <= 0.0 {
            return Err(Error::NonPositiveStep {
                name: "step_o",
                value: self.step_o,
            });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchConfig;
    use crate::{Error, Kernel, OffsetBound};
    use assert2::{check, let_assert};

    #[test]
    fn builder() {
        let config = SearchConfig::new(1.0, 10.0, 0.5, 0.01)
            .with_kernel(Kernel::Sweep)
            .with_offset_bound(OffsetBound::Exclusive)
            .with_parallel(false);
        check!(config.kernel == Kernel::Sweep);
        check!(config.offset_bound == OffsetBound::Exclusive);
        check!(!config.parallel);
        check!(config.step_o == 0.01);

        let_assert!(Ok(grid) = config.validate());
        check!(grid.len() == 19);
    }

    #[test]
    fn validate_step_o() {
        let_assert!(
            Err(Error::NonPositiveStep { name: "step_o", .. }) =
                SearchConfig::new(1.0, 2.0, 1.0, -0.1).validate()
        );
        let_assert!(
            Err(Error::NonFinite { name: "step_o" }) =
                SearchConfig::new(1.0, 2.0, 1.0, f64::INFINITY).validate()
        );
    }
}
