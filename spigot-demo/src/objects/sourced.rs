use std::fmt;

use spigot_core::{DynamicValueSource, ValueSource};
use uom::si::{
    f64::{Length, Time},
    length::meter,
};

/// A 1-D object whose position is fed by an attached dynamic source.
///
/// The object stores no positional state of its own, only a borrowed
/// handle to something that produces position on demand. Swapping the
/// attached source swaps the motion without touching the object: a
/// spline, a spring, or a recorded stream would all slot in here.
///
/// An object starts detached. Until a source is attached, [`advance`] is
/// a no-op and rendering says so explicitly; there is no null pointer to
/// trip over.
///
/// [`advance`]: SourcedObject::advance
#[derive(Default)]
pub struct SourcedObject<'a> {
    position: Option<&'a mut dyn DynamicValueSource<Value = Length>>,
}

impl<'a> SourcedObject<'a> {
    /// Creates an object with no position source attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the source that feeds this object's position.
    ///
    /// The source is borrowed exclusively: while attached, only this
    /// object steps it.
    pub fn attach_position_source(
        &mut self,
        source: &'a mut dyn DynamicValueSource<Value = Length>,
    ) {
        self.position = Some(source);
    }

    /// Steps the attached source forward; a detached object stays put.
    pub fn advance(&mut self, dt: Time) {
        if let Some(source) = self.position.as_deref_mut() {
            source.advance(dt);
        }
    }

    /// The current position, if a source is attached.
    #[must_use]
    pub fn position(&self) -> Option<Length> {
        self.position
            .as_deref()
            .map(|source| source.current_value())
    }
}

impl fmt::Display for SourcedObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(position) => write!(
                f,
                "Value-source object position: {:.2}",
                position.get::<meter>()
            ),
            None => write!(f, "Value-source object has no position source"),
        }
    }
}
