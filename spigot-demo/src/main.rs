use std::io;

use spigot_core::StepSize;
use spigot_demo::{Driver, DriverError};
use uom::si::{f64::Time, time::second};

fn main() -> Result<(), DriverError> {
    // Tick at a tenth of a time unit across a one-unit window. The loop
    // overshoots by one tick, which is what exercises the sweep's clamp.
    let driver = Driver::new(StepSize::new::<second>(0.1)?, Time::new::<second>(1.0));

    driver.run(&mut io::stdout().lock())?;
    Ok(())
}
