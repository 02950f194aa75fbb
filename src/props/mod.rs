//! Declarative validated fields.
//!
//! A field is declared once as a [`FieldSpec`] const on the owning type and
//! lives at runtime as a [`Property`] slot inside each instance. Every
//! assignment goes through the same pipeline: readonly check, optional
//! normalizer, optional validation rule, then decode into the stored type.
//! A slot only comes into existence through that pipeline, so an entity is
//! either fully validated or was never constructed.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

pub mod plugins;

use plugins::{Normalizer, Rule};

/// Raw value handed to a field setter before normalization.
///
/// Setters accept loosely typed input on purpose: rejecting a string or an
/// integer passed as a start time is the plugins' job, and keeping that
/// decision out of the function signature keeps all fields assignable through
/// one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Calendar date without a time of day.
    Date(NaiveDate),
    /// Naive timestamp, interpreted as local wall-clock time.
    DateTime(NaiveDateTime),
    /// Timezone-aware timestamp.
    Timestamp(DateTime<FixedOffset>),
    Int(i64),
    Text(String),
    /// Unique entity key.
    Key(Uuid),
    Null,
}

impl FieldValue {
    /// Short kind label used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Date(_) => "date",
            FieldValue::DateTime(_) => "datetime",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Int(_) => "integer",
            FieldValue::Text(_) => "text",
            FieldValue::Key(_) => "key",
            FieldValue::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(dt.fixed_offset())
    }
}

impl From<DateTime<Local>> for FieldValue {
    fn from(dt: DateTime<Local>) -> Self {
        FieldValue::Timestamp(dt.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        FieldValue::Timestamp(dt)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Uuid> for FieldValue {
    fn from(key: Uuid) -> Self {
        FieldValue::Key(key)
    }
}

/// `None` stands for an explicit null, not an omitted argument.
impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => FieldValue::Null,
        }
    }
}

impl TryFrom<FieldValue> for DateTime<Utc> {
    type Error = AppError;

    fn try_from(value: FieldValue) -> AppResult<Self> {
        match value {
            FieldValue::Timestamp(ts) => Ok(ts.with_timezone(&Utc)),
            other => Err(AppError::Plugin(format!(
                "expected a timestamp, got {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<FieldValue> for i64 {
    type Error = AppError;

    fn try_from(value: FieldValue) -> AppResult<Self> {
        match value {
            FieldValue::Int(v) => Ok(v),
            other => Err(AppError::Plugin(format!(
                "expected an integer, got {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<FieldValue> for String {
    type Error = AppError;

    fn try_from(value: FieldValue) -> AppResult<Self> {
        match value {
            FieldValue::Text(s) => Ok(s),
            other => Err(AppError::Plugin(format!(
                "expected text, got {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<FieldValue> for Uuid {
    type Error = AppError;

    fn try_from(value: FieldValue) -> AppResult<Self> {
        match value {
            FieldValue::Key(key) => Ok(key),
            other => Err(AppError::Plugin(format!(
                "expected a key, got {}",
                other.kind()
            ))),
        }
    }
}

/// Declarative description of one validated field.
///
/// Declared as a `const` next to the owning type, one per field, mirroring
/// how the field list reads in the schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    name: &'static str,
    readonly: bool,
    normalize: Option<Normalizer>,
    validate: Option<Rule>,
    initial: Option<fn() -> FieldValue>,
}

impl FieldSpec {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            readonly: false,
            normalize: None,
            validate: None,
            initial: None,
        }
    }

    /// A field that accepts exactly one assignment, at construction.
    pub const fn readonly(name: &'static str) -> Self {
        Self {
            name,
            readonly: true,
            normalize: None,
            validate: None,
            initial: None,
        }
    }

    pub const fn normalize(mut self, n: Normalizer) -> Self {
        self.normalize = Some(n);
        self
    }

    pub const fn validate(mut self, rule: Rule) -> Self {
        self.validate = Some(rule);
        self
    }

    /// Generator for fields whose first value is produced, not supplied
    /// (identity keys, audit stamps).
    pub const fn initial(mut self, f: fn() -> FieldValue) -> Self {
        self.initial = Some(f);
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Run the normalize/validate pipeline on a raw value.
    fn run(&self, raw: FieldValue) -> AppResult<FieldValue> {
        let normalized = match self.normalize {
            Some(n) => n.apply(raw).map_err(|e| tag(self.name, e))?,
            None => raw,
        };
        if let Some(rule) = self.validate {
            let ok = rule.check(&normalized).map_err(|e| tag(self.name, e))?;
            if !ok {
                return Err(AppError::Plugin(format!(
                    "{}: {} value rejected by {}",
                    self.name,
                    normalized.kind(),
                    rule.label()
                )));
            }
        }
        Ok(normalized)
    }
}

/// Prefix a plugin failure with the field it belongs to.
fn tag(field: &'static str, err: AppError) -> AppError {
    match err {
        AppError::Plugin(msg) => AppError::Plugin(format!("{field}: {msg}")),
        other => other,
    }
}

/// A validated field slot owned by one instance.
///
/// The slot is a plain struct field of its owner, so values cannot leak
/// across instances, and it always holds a value that passed the full
/// pipeline.
#[derive(Debug, Clone)]
pub struct Property<T> {
    spec: FieldSpec,
    value: T,
}

impl<T> Property<T>
where
    T: TryFrom<FieldValue, Error = AppError>,
{
    /// First assignment: run the pipeline and create the slot.
    pub fn bind(spec: FieldSpec, raw: impl Into<FieldValue>) -> AppResult<Self> {
        let normalized = spec.run(raw.into())?;
        let value = T::try_from(normalized).map_err(|e| tag(spec.name, e))?;
        Ok(Self { spec, value })
    }

    /// Create the slot from the spec's configured initial-value generator.
    pub fn bind_initial(spec: FieldSpec) -> AppResult<Self> {
        let generate = spec
            .initial
            .ok_or(AppError::MissingArgument(spec.name))?;
        Self::bind(spec, generate())
    }

    /// Re-assignment after construction. Readonly slots always refuse: once
    /// a slot exists its value has been set.
    pub fn assign(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        if self.spec.readonly {
            return Err(AppError::ImmutableField(self.spec.name));
        }
        let normalized = self.spec.run(raw.into())?;
        self.value = T::try_from(normalized).map_err(|e| tag(self.spec.name, e))?;
        Ok(())
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }
}
