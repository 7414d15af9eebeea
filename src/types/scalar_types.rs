/// Best fit of a periodic pulse train at a single frequency.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Unit: `Hz` (or the inverse of whatever unit the event times use)
    pub freq: f64,
    /// Root of the minimal mean squared nearest-tick deviation.
    /// Same unit as the event times.
    pub rmsd: f64,
    /// Phase offset of the best pulse train relative to its period-aligned
    /// start. The first offset wins if several reach the same deviation.
    pub offset: f64,
}
