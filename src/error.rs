use std::collections::TryReserveError;
use thiserror::Error;

/// Coarse classification of an [`Error`], useful for callers that only care
/// about whose fault a failure was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The shape of the input is unusable (too few events, NaN, unsorted).
    InvalidArgument,
    /// Parameters describe an empty or malformed frequency / offset grid.
    Domain,
    /// A buffer could not be allocated.
    OutOfMemory,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("at least two events are required, got {count}")]
    InsufficientEvents { count: usize },
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("events must be sorted ascending, event {index} precedes its predecessor")]
    UnsortedEvents { index: usize },
    #[error("{name} must be positive, got {value}")]
    NonPositiveStep { name: &'static str, value: f64 },
    #[error("frequencies must be positive, got min_f = {value}")]
    NonPositiveFrequency { value: f64 },
    #[error("frequency range is inverted: min_f = {min} > max_f = {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("{name} = {value} is not an integer multiple of step_f = {step}")]
    NotAMultiple {
        name: &'static str,
        value: f64,
        step: f64,
    },
    #[error("{name} would need about {size:e} points, more than can be indexed exactly")]
    GridTooLarge { name: &'static str, size: f64 },
    #[error("pulse train starting at {first} does not reach stop = {stop}")]
    EmptyPulseTrain { first: f64, stop: f64 },
    #[error("out of memory")]
    OutOfMemory(#[from] TryReserveError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InsufficientEvents { .. }
            | Error::NonFinite { .. }
            | Error::UnsortedEvents { .. } => ErrorKind::InvalidArgument,
            Error::NonPositiveStep { .. }
            | Error::NonPositiveFrequency { .. }
            | Error::InvertedRange { .. }
            | Error::NotAMultiple { .. }
            | Error::GridTooLarge { .. }
            | Error::EmptyPulseTrain { .. } => ErrorKind::Domain,
            Error::OutOfMemory(_) => ErrorKind::OutOfMemory,
        }
    }
}
