use std::collections::TryReserveError;

use crate::Fit;

/// Result of a grid search, one entry per tested frequency in ascending order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RmsdCurve {
    pub freq: Vec<f64>,
    pub rmsd: Vec<f64>,
    pub offset: Vec<f64>,
}

// Convert AoS to SoA

impl From<Vec<Fit>> for RmsdCurve {
    fn from(value: Vec<Fit>) -> Self {
        Self {
            freq: value.iter().map(|f| f.freq).collect(),
            rmsd: value.iter().map(|f| f.rmsd).collect(),
            offset: value.iter().map(|f| f.offset).collect(),
        }
    }
}

impl RmsdCurve {
    /// Empty curve with room for `capacity` fits, or an error if that much
    /// memory can't be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut curve = Self::default();
        curve.freq.try_reserve_exact(capacity)?;
        curve.rmsd.try_reserve_exact(capacity)?;
        curve.offset.try_reserve_exact(capacity)?;
        Ok(curve)
    }

    pub fn push(&mut self, fit: Fit) {
        self.freq.push(fit.freq);
        self.rmsd.push(fit.rmsd);
        self.offset.push(fit.offset);
    }

    pub fn len(&self) -> usize {
        let len1 = self.freq.len();
        let len2 = self.rmsd.len();
        let len3 = self.offset.len();
        assert!(len1 == len2 && len2 == len3);
        len1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Fit> {
        Some(Fit {
            freq: *self.freq.get(index)?,
            rmsd: *self.rmsd.get(index)?,
            offset: *self.offset.get(index)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Fit> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// The frequency with the lowest RMSD. Harmonics of the true frequency
    /// often fit equally well, in that case the lowest frequency is returned.
    pub fn best(&self) -> Option<Fit> {
        self.iter()
            .reduce(|best, fit| if fit.rmsd < best.rmsd { fit } else { best })
    }

    /// Split into the `(freq, rmsd)` pair of the classic interface.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.freq, self.rmsd)
    }
}
