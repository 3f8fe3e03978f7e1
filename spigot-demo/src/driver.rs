use std::io::{self, Write};

use spigot_core::{StepSize, StepSizeError};
use spigot_sources::{LinearAccumulator, LinearInterpolator};
use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Time, Velocity},
        length::meter,
        ratio::ratio,
        time::second,
        velocity::meter_per_second,
    },
};

use crate::{ClassicObject, ReactiveObject, SourcedObject};

/// Errors from assembling or running the demo.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Step(#[from] StepSizeError),

    #[error("failed to write demo output")]
    Io(#[from] io::Error),
}

/// Runs the three demo objects side by side on a fixed tick.
///
/// The driver owns every value source for the whole run; the consumer
/// objects only borrow them, so a source can never dangle. Each tick
/// writes a timestamp line followed by one rendered line per object.
///
/// The loop deliberately overshoots: it keeps ticking while the elapsed
/// time at the *start* of a tick is within the duration, so the final
/// tick lands past the end. The stepped objects sail on while the
/// interpolated one clamps at its upper bound, which is the whole point
/// of the comparison.
#[derive(Debug, Clone, Copy)]
pub struct Driver {
    step: StepSize,
    duration: Time,
}

impl Driver {
    /// Creates a driver that ticks by `step` until `duration` has elapsed.
    #[must_use]
    pub fn new(step: StepSize, duration: Time) -> Self {
        Self { step, duration }
    }

    /// Runs the simulation to completion, writing each tick to `out`.
    ///
    /// # Errors
    ///
    /// Fails only if writing to `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        // The classic object carries its state directly.
        let mut classic = ClassicObject::new(
            Length::new::<meter>(1.0),
            Velocity::new::<meter_per_second>(4.0),
        );

        // The sourced object gets the same motion, but the state lives in
        // the accumulator and the object merely borrows it.
        let mut movement = LinearAccumulator::new(
            Length::new::<meter>(1.0),
            Velocity::new::<meter_per_second>(4.0),
        );
        let mut sourced = SourcedObject::new();
        sourced.attach_position_source(&mut movement);

        // The reactive object sweeps the same range as time is pushed
        // into the interpolator below, min and max instead of start and
        // velocity.
        let sweep = LinearInterpolator::new(Length::new::<meter>(1.0), Length::new::<meter>(5.0));
        let mut reactive = ReactiveObject::new();
        reactive.attach_position_source(&sweep);

        let mut elapsed = Time::ZERO;
        while elapsed <= self.duration {
            elapsed = elapsed + self.step;
            writeln!(out, "Tick at {:.1}", elapsed.get::<second>())?;

            // Advance the stepped objects, then push the elapsed fraction
            // of the demo window into the reactive source.
            classic.advance(self.step.get());
            sourced.advance(self.step.get());
            sweep.set_time((elapsed / self.duration).get::<ratio>());

            writeln!(out, "{classic}")?;
            writeln!(out, "{sourced}")?;
            writeln!(out, "{reactive}")?;
        }

        Ok(())
    }
}
