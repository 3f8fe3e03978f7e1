//! The same 1-D motion, expressed three ways.
//!
//! This crate is the demonstration half of Spigot. Three independent
//! moving-object types consume the value sources from [`spigot_sources`],
//! one per architectural style:
//!
//! - [`SourcedObject`] delegates both stepping and position to an
//!   attached dynamic source (update/present style).
//! - [`ReactiveObject`] only ever reads its position; time is pushed into
//!   the source from outside (reactive style).
//! - [`ClassicObject`] owns and mutates its own state directly (the
//!   conventional rendition).
//!
//! The types deliberately share no interface with each other. [`Driver`]
//! runs all three side by side on a fixed tick and writes each object's
//! rendered line to an output sink, which makes the differences, and the
//! sameness of the resulting motion, easy to eyeball.

mod driver;
mod objects;

pub use driver::{Driver, DriverError};
pub use objects::{ClassicObject, ReactiveObject, SourcedObject};
