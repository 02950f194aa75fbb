//! homekeeper library root.
//! A personal home-management data layer: validated calendar events built on
//! a declarative property mechanism, with SQLite bootstrap helpers.

pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod props;
pub mod utils;

pub use config::Config;
pub use errors::{AppError, AppResult};
pub use models::event::{Event, EventBuilder, TITLE_MAX_LEN};
pub use models::mixins::{Audited, Keyed};
pub use props::plugins::{Normalizer, Rule, ELLIPSIS};
pub use props::{FieldSpec, FieldValue, Property};
