use std::fmt;

use uom::si::{
    f64::{Length, Time, Velocity},
    length::meter,
};

/// The conventional rendition: the object owns its own state.
///
/// Initial state goes in at construction, [`advance`] integrates it in
/// place, and rendering reads it back. No indirection anywhere, and
/// nothing to attach.
///
/// [`advance`]: ClassicObject::advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicObject {
    position: Length,
    velocity: Velocity,
}

impl ClassicObject {
    /// Creates an object at `start`, moving at `velocity`.
    #[must_use]
    pub fn new(start: Length, velocity: Velocity) -> Self {
        Self {
            position: start,
            velocity,
        }
    }

    /// Moves the object forward by `dt`.
    pub fn advance(&mut self, dt: Time) {
        self.position += self.velocity * dt;
    }

    /// The current position.
    #[must_use]
    pub fn position(&self) -> Length {
        self.position
    }
}

impl fmt::Display for ClassicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Classic object position: {:.2}",
            self.position.get::<meter>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{time::second, velocity::meter_per_second};

    #[test]
    fn integrates_its_own_state() {
        let mut object = ClassicObject::new(
            Length::new::<meter>(1.0),
            Velocity::new::<meter_per_second>(4.0),
        );

        for _ in 0..10 {
            object.advance(Time::new::<second>(0.1));
        }

        assert_relative_eq!(object.position().get::<meter>(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn renders_its_position() {
        let mut object = ClassicObject::new(
            Length::new::<meter>(1.0),
            Velocity::new::<meter_per_second>(4.0),
        );

        object.advance(Time::new::<second>(0.1));
        assert_eq!(object.to_string(), "Classic object position: 1.40");
    }
}
