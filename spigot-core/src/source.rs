use uom::si::f64::Time;

/// A read-only capability producing the current value of some quantity.
///
/// Consumers of a `ValueSource` never learn how the value is computed.
/// The same consumer can be fed by fixed coordinates, an integrator, a
/// recorded stream, or a network replica, and it cannot tell the
/// difference.
///
/// Observation is pure: calling [`current_value`] any number of times
/// without mutating the source in between must return identical results.
/// There are no preconditions and no error conditions.
///
/// [`current_value`]: ValueSource::current_value
pub trait ValueSource {
    /// The type of value this source produces.
    type Value;

    /// Returns the value at the present instant.
    fn current_value(&self) -> Self::Value;
}

/// A [`ValueSource`] that is advanced imperatively through time.
///
/// This is the traditional update/present architecture: a loop calls
/// [`advance`] to move state forward, then queries [`current_value`] to
/// act on the result. Doing nothing in [`advance`] is a perfectly valid
/// implementation, as is routing the value through any number of
/// indirections before it arrives here.
///
/// The delta is trusted input. Implementations are total over all of
/// [`Time`] and signal no errors; a negative delta simply runs the source
/// backwards if it supports that.
///
/// [`advance`]: DynamicValueSource::advance
/// [`current_value`]: ValueSource::current_value
pub trait DynamicValueSource: ValueSource {
    /// Moves the source's internal state forward by `dt`.
    fn advance(&mut self, dt: Time);
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter, time::second};

    /// A source that ignores time entirely.
    struct StuckAt(Length);

    impl ValueSource for StuckAt {
        type Value = Length;

        fn current_value(&self) -> Length {
            self.0
        }
    }

    impl DynamicValueSource for StuckAt {
        fn advance(&mut self, _dt: Time) {}
    }

    #[test]
    fn observation_is_idempotent() {
        let source = StuckAt(Length::new::<meter>(2.5));
        assert_eq!(source.current_value(), source.current_value());
    }

    #[test]
    fn sources_work_as_trait_objects() {
        let mut stuck = StuckAt(Length::new::<meter>(2.5));

        let dynamic: &mut dyn DynamicValueSource<Value = Length> = &mut stuck;
        dynamic.advance(Time::new::<second>(10.0));
        assert_eq!(dynamic.current_value(), Length::new::<meter>(2.5));

        let read_only: &dyn ValueSource<Value = Length> = &stuck;
        assert_eq!(read_only.current_value(), Length::new::<meter>(2.5));
    }
}
