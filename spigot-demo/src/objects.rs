mod classic;
mod reactive;
mod sourced;

pub use classic::ClassicObject;
pub use reactive::ReactiveObject;
pub use sourced::SourcedObject;
