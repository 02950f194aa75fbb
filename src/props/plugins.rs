//! Pluggable normalization and validation rules for field specs.
//!
//! Each plugin is a tagged variant carrying its own configuration, applied
//! to a [`FieldValue`] independently of any particular field.

use crate::errors::{AppError, AppResult};
use crate::props::FieldValue;
use crate::utils::time::{local_to_utc, midnight_to_utc};

/// Marker appended by [`Normalizer::MaxLenStr`] when it truncates.
pub const ELLIPSIS: &str = "...";

/// Transforms a raw value into canonical form before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Canonicalize any date/datetime input to a UTC timestamp.
    /// Dates become local midnight, naive timestamps are taken as local
    /// time; both are then converted to UTC. Aware timestamps are converted
    /// directly.
    UtcDate,
    /// Cap text at `max_len` characters, replacing the tail with an
    /// ellipsis marker when it truncates. Non-text input passes through
    /// untouched for the validation rule to judge.
    MaxLenStr { max_len: usize },
}

impl Normalizer {
    pub fn apply(&self, raw: FieldValue) -> AppResult<FieldValue> {
        match self {
            Normalizer::UtcDate => utc_date(raw),
            Normalizer::MaxLenStr { max_len } => Ok(max_len_str(raw, *max_len)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Normalizer::UtcDate => "UtcDate",
            Normalizer::MaxLenStr { .. } => "MaxLenStr",
        }
    }
}

fn utc_date(raw: FieldValue) -> AppResult<FieldValue> {
    match raw {
        FieldValue::Date(d) => midnight_to_utc(d)
            .map(FieldValue::from)
            .ok_or_else(|| AppError::Plugin(format!("midnight of {d} does not exist locally"))),
        FieldValue::DateTime(naive) => local_to_utc(naive)
            .map(FieldValue::from)
            .ok_or_else(|| AppError::Plugin(format!("local time {naive} does not exist"))),
        FieldValue::Timestamp(ts) => Ok(ts.to_utc().into()),
        other => Err(AppError::Plugin(format!(
            "expected a date or datetime, got {}",
            other.kind()
        ))),
    }
}

fn max_len_str(raw: FieldValue, max_len: usize) -> FieldValue {
    match raw {
        FieldValue::Text(s) if s.chars().count() > max_len => {
            let keep = max_len.saturating_sub(ELLIPSIS.len());
            let mut truncated: String = s.chars().take(keep).collect();
            truncated.push_str(ELLIPSIS);
            FieldValue::Text(truncated)
        }
        other => other,
    }
}

/// Accepts or rejects a normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be a date or timestamp kind. Second gate behind
    /// [`Normalizer::UtcDate`].
    IsDateOrDatetime,
    /// Value must be an integer `>= min_value`. Null is rejected.
    RequiredInt { min_value: i64 },
    /// Value must be non-empty text. Null is rejected.
    RequiredString,
}

impl Rule {
    pub fn check(&self, value: &FieldValue) -> AppResult<bool> {
        match self {
            Rule::IsDateOrDatetime => Ok(matches!(
                value,
                FieldValue::Date(_) | FieldValue::DateTime(_) | FieldValue::Timestamp(_)
            )),
            Rule::RequiredInt { min_value } => match value {
                FieldValue::Int(v) => Ok(*v >= *min_value),
                _ => Ok(false),
            },
            Rule::RequiredString => match value {
                FieldValue::Text(s) => Ok(!s.is_empty()),
                _ => Ok(false),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rule::IsDateOrDatetime => "IsDateOrDatetime",
            Rule::RequiredInt { .. } => "RequiredInt",
            Rule::RequiredString => "RequiredString",
        }
    }
}
