pub mod event;
pub mod mixins;

pub use event::{Event, EventBuilder};
pub use mixins::{Audited, Keyed};
