//! Calendar event entity.
//!
//! An `Event` composes the [`Keyed`] and [`Audited`] capabilities with four
//! validated fields. Construction is atomic: the first field that fails
//! normalization or validation aborts the whole build and no partial event
//! exists.

use chrono::{DateTime, Duration, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

use super::mixins::{Audited, Keyed};
use crate::errors::{AppError, AppResult};
use crate::props::plugins::{Normalizer, Rule};
use crate::props::{FieldSpec, FieldValue, Property};
use crate::utils::format_minutes;

/// Titles longer than this are truncated with an ellipsis marker.
pub const TITLE_MAX_LEN: usize = 25;

const START: FieldSpec = FieldSpec::new("start")
    .normalize(Normalizer::UtcDate)
    .validate(Rule::IsDateOrDatetime);
const LENGTH: FieldSpec = FieldSpec::new("length").validate(Rule::RequiredInt { min_value: 0 });
const TITLE: FieldSpec = FieldSpec::new("title")
    .normalize(Normalizer::MaxLenStr {
        max_len: TITLE_MAX_LEN,
    })
    .validate(Rule::RequiredString);
const DESCRIPTION: FieldSpec = FieldSpec::new("description");

/// A single entry in a calendar.
#[derive(Debug, Clone)]
pub struct Event {
    key: Keyed,
    audit: Audited,
    start: Property<DateTime<Utc>>,
    length: Property<i64>,
    title: Property<String>,
    description: Property<String>,
}

impl Event {
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// High-level constructor for the common case. Use [`Event::builder`]
    /// when an argument may be absent.
    pub fn new(
        title: &str,
        evt_start: impl Into<FieldValue>,
        evt_length_minutes: i64,
        description: &str,
    ) -> AppResult<Self> {
        Self::builder()
            .title(title)
            .start(evt_start)
            .length_minutes(evt_length_minutes)
            .description(description)
            .build()
    }

    pub fn jm_key(&self) -> Uuid {
        self.key.jm_key()
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.audit.creation_date()
    }

    pub fn start(&self) -> DateTime<Utc> {
        *self.start.get()
    }

    /// Event length in minutes.
    pub fn length(&self) -> i64 {
        *self.length.get()
    }

    pub fn title(&self) -> &str {
        self.title.get()
    }

    pub fn description(&self) -> &str {
        self.description.get()
    }

    /// End of the event: start plus length. Recomputed on every call so it
    /// always reflects the current start and length.
    pub fn end(&self) -> DateTime<Utc> {
        self.start() + Duration::minutes(self.length())
    }

    pub fn start_str(&self) -> String {
        self.start().format("%Y-%m-%d %H:%M").to_string()
    }

    /// Event length as `HH:MM`.
    pub fn length_str(&self) -> String {
        format_minutes(self.length())
    }

    pub fn set_start(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        self.start.assign(raw)
    }

    pub fn set_length(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        self.length.assign(raw)
    }

    pub fn set_title(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        self.title.assign(raw)
    }

    /// Empty or non-text input falls back to the title, as at construction.
    pub fn set_description(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        let raw = description_or_fallback(raw.into(), self.title());
        self.description.assign(raw)
    }

    /// Fails with [`AppError::ImmutableField`]: the key never changes.
    pub fn set_jm_key(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        self.key.set_jm_key(raw)
    }

    /// Fails with [`AppError::ImmutableField`]: the stamp never changes.
    pub fn set_creation_date(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        self.audit.set_creation_date(raw)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} +{}]",
            self.title(),
            self.start_str(),
            self.length_str()
        )
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Event", 6)?;
        st.serialize_field("jm_key", &self.jm_key())?;
        st.serialize_field("creation_date", &self.creation_date().to_rfc3339())?;
        st.serialize_field("start", &self.start().to_rfc3339())?;
        st.serialize_field("length", &self.length())?;
        st.serialize_field("title", self.title())?;
        st.serialize_field("description", self.description())?;
        st.end()
    }
}

fn description_or_fallback(raw: FieldValue, title: &str) -> FieldValue {
    match raw {
        FieldValue::Text(s) if !s.is_empty() => FieldValue::Text(s),
        _ => FieldValue::Text(title.to_string()),
    }
}

/// Staged constructor arguments for [`Event`].
///
/// Distinguishes an argument that was never supplied (a
/// [`AppError::MissingArgument`] at build time) from one supplied with an
/// invalid value (a plugin failure).
#[derive(Debug, Default)]
pub struct EventBuilder {
    title: Option<FieldValue>,
    start: Option<FieldValue>,
    length: Option<FieldValue>,
    description: Option<FieldValue>,
}

impl EventBuilder {
    pub fn title(mut self, raw: impl Into<FieldValue>) -> Self {
        self.title = Some(raw.into());
        self
    }

    pub fn start(mut self, raw: impl Into<FieldValue>) -> Self {
        self.start = Some(raw.into());
        self
    }

    pub fn length_minutes(mut self, raw: impl Into<FieldValue>) -> Self {
        self.length = Some(raw.into());
        self
    }

    pub fn description(mut self, raw: impl Into<FieldValue>) -> Self {
        self.description = Some(raw.into());
        self
    }

    pub fn build(self) -> AppResult<Event> {
        let raw_title = self.title.ok_or(AppError::MissingArgument("title"))?;
        let raw_start = self.start.ok_or(AppError::MissingArgument("evt_start"))?;
        let raw_length = self.length.unwrap_or(FieldValue::Int(0));

        // Capabilities first, so identity and audit state exist before any
        // field assignment runs.
        let key = Keyed::init()?;
        let audit = Audited::init()?;

        let start = Property::bind(START, raw_start)?;
        let length = Property::bind(LENGTH, raw_length)?;
        let title: Property<String> = Property::bind(TITLE, raw_title)?;
        let raw_description = description_or_fallback(
            self.description.unwrap_or(FieldValue::Null),
            title.get(),
        );
        let description = Property::bind(DESCRIPTION, raw_description)?;

        log::info!("created event: id = {}, title = {}", key.jm_key(), title.get());

        Ok(Event {
            key,
            audit,
            start,
            length,
            title,
            description,
        })
    }
}
