use spigot_core::{DynamicValueSource, ValueSource};
use uom::si::f64::{Length, Time, Velocity};

/// A value source that integrates a constant velocity over time.
///
/// Each call to [`advance`] adds `velocity * dt` to the running value, so
/// after deltas `d1..dN` the value is `start + velocity * (d1 + ... + dN)`.
///
/// Floating-point edge cases (overflow, NaN deltas) are the caller's
/// concern and are not checked here.
///
/// [`advance`]: DynamicValueSource::advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAccumulator {
    value: Length,
    velocity: Velocity,
}

impl LinearAccumulator {
    /// Creates an accumulator at `start`, moving at `velocity`.
    #[must_use]
    pub fn new(start: Length, velocity: Velocity) -> Self {
        Self {
            value: start,
            velocity,
        }
    }
}

impl ValueSource for LinearAccumulator {
    type Value = Length;

    fn current_value(&self) -> Length {
        self.value
    }
}

impl DynamicValueSource for LinearAccumulator {
    fn advance(&mut self, dt: Time) {
        self.value += self.velocity * dt;
    }
}
