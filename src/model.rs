//! Capability traits for in-memory models and the helpers that populate
//! their defaults before a write.
//!
//! ## Example
//!
//! ```ignore
//! use seqkit::{ensure_ids, set_dates, HasCreated, HasDates, Identifiable};
//!
//! let mut tasks = vec![Task::new("write docs"), Task::new("ship release")];
//!
//! ensure_ids(Some(&mut tasks));
//! set_dates(Some(&mut tasks));
//! ```

use chrono::{DateTime, Utc};

use crate::object_id::ObjectId;

/// Capability for models addressed by a string identifier.
///
/// An empty identifier means the model has not been assigned one yet.
pub trait Identifiable {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: impl Into<String>);
}

/// Capability for models that record when they were created.
///
/// `DateTime::<Utc>::default()` (the Unix epoch) is the unset sentinel;
/// a model carrying it is treated as never having been stamped.
pub trait HasCreated {
    fn created_utc(&self) -> DateTime<Utc>;
    fn set_created_utc(&mut self, at: DateTime<Utc>);
}

/// Capability for models that record both creation and last-update times.
pub trait HasDates: HasCreated {
    fn updated_utc(&self) -> DateTime<Utc>;
    fn set_updated_utc(&mut self, at: DateTime<Utc>);
}

/// Assigns a fresh [`ObjectId`] to every model whose identifier is still
/// empty.
///
/// Models that already carry an identifier are left alone, so repeated
/// calls are idempotent. An absent slice is a no-op.
pub fn ensure_ids<T: Identifiable>(values: Option<&mut [T]>) {
    let Some(values) = values else {
        return;
    };

    for value in values.iter_mut() {
        if value.id().is_empty() {
            value.set_id(ObjectId::new().to_hex());
        }
    }
}

/// Stamps `created_utc` on first write and refreshes `updated_utc` on
/// every call.
///
/// Both fields receive the same instant when a model is stamped for the
/// first time. An absent slice is a no-op.
pub fn set_dates<T: HasDates>(values: Option<&mut [T]>) {
    let Some(values) = values else {
        return;
    };

    for value in values.iter_mut() {
        let now = Utc::now();
        if value.created_utc() == DateTime::<Utc>::default() {
            value.set_created_utc(now);
        }
        value.set_updated_utc(now);
    }
}

/// Stamps `created_utc` on first write, leaving any update timestamp
/// untouched.
///
/// An absent slice is a no-op.
pub fn set_created_dates<T: HasCreated>(values: Option<&mut [T]>) {
    let Some(values) = values else {
        return;
    };

    for value in values.iter_mut() {
        if value.created_utc() == DateTime::<Utc>::default() {
            value.set_created_utc(Utc::now());
        }
    }
}
