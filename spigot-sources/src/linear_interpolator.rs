use std::cell::Cell;

use spigot_core::ValueSource;
use uom::si::f64::Length;

/// A value source that blends linearly between two bounds.
///
/// Time is pushed in from outside via [`set_time`] rather than
/// accumulated, making this the reactive counterpart to the imperative
/// [`DynamicValueSource`] stepping style. The supplied time is clamped to
/// `[0.0, 1.0]`, bounds inclusive, and the blended value is cached
/// immediately; [`current_value`] only reads the cache.
///
/// Reactive observers hold shared references to the source while whoever
/// owns it keeps pushing time in, so the mutable fields live in [`Cell`]s
/// and [`set_time`] takes `&self`. The type is accordingly not `Sync`.
///
/// [`set_time`]: LinearInterpolator::set_time
/// [`current_value`]: ValueSource::current_value
/// [`DynamicValueSource`]: spigot_core::DynamicValueSource
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    min: Length,
    max: Length,
    time: Cell<f64>,
    value: Cell<Length>,
}

impl LinearInterpolator {
    /// Creates an interpolator spanning `min` to `max`, starting at `min`.
    #[must_use]
    pub fn new(min: Length, max: Length) -> Self {
        Self {
            min,
            max,
            time: Cell::new(0.0),
            value: Cell::new(min),
        }
    }

    /// Sets the normalized time and recomputes the cached value.
    ///
    /// Values below `0.0` clamp to `0.0` and values above `1.0` clamp to
    /// `1.0`; exactly `0.0` and `1.0` pass through untouched, so clamping
    /// is idempotent.
    pub fn set_time(&self, t: f64) {
        let t = t.clamp(0.0, 1.0);
        self.time.set(t);
        self.value.set(self.min + (self.max - self.min) * t);
    }

    /// The clamped time from the most recent [`set_time`] call.
    ///
    /// [`set_time`]: LinearInterpolator::set_time
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time.get()
    }
}

impl ValueSource for LinearInterpolator {
    type Value = Length;

    fn current_value(&self) -> Length {
        self.value.get()
    }
}
