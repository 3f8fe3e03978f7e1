use spigot_core::{DynamicValueSource, ValueSource};
use uom::si::f64::Time;

/// A value source that always produces the same value.
///
/// The degenerate end of the abstraction: advancing a `Constant` does
/// nothing. It can stand in anywhere a dynamic source is expected, for
/// example to pin an object in place without touching the consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<T: Copy> {
    value: T,
}

impl<T: Copy> Constant<T> {
    /// Creates a source fixed at `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Copy> ValueSource for Constant<T> {
    type Value = T;

    fn current_value(&self) -> T {
        self.value
    }
}

impl<T: Copy> DynamicValueSource for Constant<T> {
    fn advance(&mut self, _dt: Time) {}
}
