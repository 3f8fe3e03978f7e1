use std::fmt;

use spigot_core::ValueSource;
use uom::si::{f64::Length, length::meter};

/// A 1-D object that only ever reads its position.
///
/// There is no `advance` here. Whatever drives the attached source does
/// so from outside, which is what lets a reactive setup do things an
/// update loop cannot, like replaying or rewinding time: hand the source
/// an earlier time and the object simply reads an earlier position.
#[derive(Default)]
pub struct ReactiveObject<'a> {
    position: Option<&'a dyn ValueSource<Value = Length>>,
}

impl<'a> ReactiveObject<'a> {
    /// Creates an object with no position source attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the source that feeds this object's position.
    ///
    /// The source is only observed through this handle, so it stays
    /// available to whoever is driving it.
    pub fn attach_position_source(&mut self, source: &'a dyn ValueSource<Value = Length>) {
        self.position = Some(source);
    }

    /// The current position, if a source is attached.
    #[must_use]
    pub fn position(&self) -> Option<Length> {
        self.position.map(|source| source.current_value())
    }
}

impl fmt::Display for ReactiveObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(position) => write!(
                f,
                "Reactive programming object position: {:.2}",
                position.get::<meter>()
            ),
            None => write!(f, "Reactive programming object has no position source"),
        }
    }
}
