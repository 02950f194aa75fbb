//! Identity and audit capabilities shared by entity types.
//!
//! Each capability contributes exactly one write-once field and its
//! initialization. Entities embed the structs they need and run `init()`
//! before any of their own field assignments.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppResult;
use crate::props::{FieldSpec, FieldValue, Property};

const JM_KEY: FieldSpec = FieldSpec::readonly("jm_key").initial(next_key);
const CREATION_DATE: FieldSpec = FieldSpec::readonly("creation_date").initial(now_utc);

fn next_key() -> FieldValue {
    // v7 keys are time-ordered, so later entities sort after earlier ones.
    FieldValue::Key(Uuid::now_v7())
}

fn now_utc() -> FieldValue {
    Utc::now().into()
}

/// Grants an instance an immutable unique(ish) key.
#[derive(Debug, Clone)]
pub struct Keyed {
    jm_key: Property<Uuid>,
}

impl Keyed {
    pub fn init() -> AppResult<Self> {
        let jm_key = Property::bind_initial(JM_KEY)?;
        log::debug!("Keyed init: jm_key = {}", jm_key.get());
        Ok(Self { jm_key })
    }

    pub fn jm_key(&self) -> Uuid {
        *self.jm_key.get()
    }

    /// Always refuses: the key is settled at construction.
    pub fn set_jm_key(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        self.jm_key.assign(raw)
    }
}

/// Grants an instance an immutable creation timestamp (UTC).
#[derive(Debug, Clone)]
pub struct Audited {
    creation_date: Property<DateTime<Utc>>,
}

impl Audited {
    pub fn init() -> AppResult<Self> {
        let creation_date = Property::bind_initial(CREATION_DATE)?;
        log::debug!("Audited init: creation_date = {}", creation_date.get());
        Ok(Self { creation_date })
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        *self.creation_date.get()
    }

    /// Always refuses: the stamp is settled at construction.
    pub fn set_creation_date(&mut self, raw: impl Into<FieldValue>) -> AppResult<()> {
        self.creation_date.assign(raw)
    }
}
