//! Estimate the periodicity of a set of event timestamps (spike times,
//! impulses, ...) by brute force: for every frequency of a grid, slide a
//! perfectly periodic pulse train over the events in small phase steps and
//! measure how far the events are from their nearest tick. The result is the
//! root-mean-square deviation (RMSD) of the best phase for each frequency.
//! A periodic generator shows up as a (near) zero RMSD at its frequency and
//! at its harmonics.
//!
//! ```
//! let events = [0.0, 1.0, 2.0, 3.0];
//! let config = pulsegat::SearchConfig::new(0.5, 2.0, 0.5, 0.05);
//! let curve = pulsegat::grid_search(&events, &config).unwrap();
//!
//! assert_eq!(curve.freq, [0.5, 1.0, 1.5, 2.0]);
//! assert_eq!(curve.best().unwrap().freq, 1.0);
//! ```
//!
//! The computation is a pure function of its inputs. With the `parallel`
//! feature (on by default), frequencies are evaluated on the rayon thread
//! pool; the output is the same either way.

mod config;
mod deviation;
mod error;
mod grid;
mod pulse;
mod search;
mod types;
mod util;

pub use config::SearchConfig;
pub use deviation::sum_sqr_deviation;
pub use error::{Error, ErrorKind};
pub use grid::{FrequencyGrid, OffsetGrid};
pub use pulse::PulseTrain;
pub use search::{grid_search, pulse_gat};
pub use types::*;
