mod source;
mod step_size;

pub use source::{DynamicValueSource, ValueSource};
pub use step_size::{StepSize, StepSizeError};
