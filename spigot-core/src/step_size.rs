use std::{fmt, ops::Add};

use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

/// A strictly positive duration used as a simulation tick.
///
/// The value-source traits accept any [`Time`] delta, but a driver loop
/// stepping by zero or a negative amount would never terminate.
/// `StepSize` checks the sign once at construction, so the loop itself
/// carries no validation.
///
/// # Examples
///
/// ```
/// use spigot_core::StepSize;
/// use uom::si::time::second;
///
/// let dt = StepSize::new::<second>(0.1).unwrap();
/// assert_eq!(dt.to_string(), "0.1 s");
///
/// assert!(StepSize::new::<second>(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StepSize(Time);

/// Error returned when constructing an invalid [`StepSize`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepSizeError {
    #[error("step size must be greater than zero, got {0} s")]
    NotPositive(f64),
}

impl StepSize {
    /// Creates a `StepSize` from a numeric value and a [`uom`] time unit.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::NotPositive`] if `value` is zero, negative,
    /// or NaN.
    pub fn new<U>(value: f64) -> Result<Self, StepSizeError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Creates a `StepSize` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::NotPositive`] if the duration is not
    /// strictly positive.
    pub fn from_time(time: Time) -> Result<Self, StepSizeError> {
        let seconds = time.get::<time::second>();
        if seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(StepSizeError::NotPositive(seconds))
        }
    }

    /// Returns the inner [`Time`] value.
    #[must_use]
    pub fn get(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for StepSize {
    type Error = StepSizeError;

    fn try_from(time: Time) -> Result<Self, Self::Error> {
        Self::from_time(time)
    }
}

/// Advances a [`Time`] by one step.
impl Add<StepSize> for Time {
    type Output = Time;

    fn add(self, rhs: StepSize) -> Time {
        self + rhs.0
    }
}

impl fmt::Display for StepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.get::<time::second>();
        write!(f, "{s} s")
    }
}
