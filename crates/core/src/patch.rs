//! Tri-state field wrapper for partial-update payloads.
//!
//! A plain `Option<T>` cannot tell "the client left this field out" apart
//! from "the client sent `null`". [`Patch`] keeps the two separate so a
//! nullable column can be cleared through a PATCH request.
//!
//! Fields of this type must carry `#[serde(default)]` so that an omitted
//! key deserializes to [`Patch::Absent`]:
//!
//! ```
//! use serde::Deserialize;
//! use todo_core::patch::Patch;
//!
//! #[derive(Deserialize)]
//! struct Body {
//!     #[serde(default)]
//!     order: Patch<i64>,
//! }
//!
//! let body: Body = serde_json::from_str(r#"{ "order": null }"#).unwrap();
//! assert_eq!(body.order, Patch::Null);
//! ```

use serde::{Deserialize, Deserializer};

/// One optional field of a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field was omitted: leave the stored value alone.
    Absent,
    /// The field was sent as `null`: clear the stored value.
    Null,
    /// The field was sent with a value.
    Value(T),
}

impl<T> Patch<T> {
    /// `true` unless the field was omitted.
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(v),
        }
    }

    /// Collapse to the value to write, if any.
    ///
    /// Returns `None` for an absent field, `Some(None)` for an explicit null
    /// and `Some(Some(v))` for a value.
    pub fn into_write(self) -> Option<Option<T>> {
        match self {
            Patch::Absent => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// A present field: `None` becomes [`Patch::Null`].
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; omission goes through `Default`.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
