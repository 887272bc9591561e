//! Inventory of declared model types.
//!
//! `#[model]`, `define_family!` and the collection aliases each submit a
//! [`ModelEntry`] at compile time. Decoding never goes through the registry;
//! family dispatch is a fixed match. The registry exists so tooling can find a
//! type by name and drive it through type-erased function pointers.
//!
//! # Sealed Pattern
//!
//! Entries carry a `__sealed: Sealed` field so they can only be built by macro
//! expansions that go through `__private::sealed()`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{ModelError, ModelSummary, Result};

/// What sort of wire type an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// A concrete type declared with `#[model]`.
    Model,
    /// A discriminated family declared with `define_family!`.
    Family,
    /// A collection response envelope.
    Collection,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Model => "model",
            Self::Family => "family",
            Self::Collection => "collection",
        })
    }
}

/// Marker type preventing construction of entries outside macro expansions.
#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub struct Sealed(pub(crate) ());

/// Registration of one wire type.
#[derive(Debug)]
pub struct ModelEntry {
    /// Rust-side type name, e.g. `SingleUser` or `SubjectSetCollectionResponse`.
    pub name: &'static str,
    /// Discriminator of the type, if it has one.
    pub odata_type: Option<&'static str>,
    pub kind: ModelKind,
    /// Tags a family dispatches on; empty for other kinds.
    pub discriminators: &'static [&'static str],
    /// Decodes a document as this type and encodes it back.
    pub roundtrip_fn: fn(Value) -> Result<Value>,
    /// Decodes a document as this type and summarizes the result.
    pub summary_fn: fn(Value) -> Result<ModelSummary>,
    /// Returns the JSON Schema of this type.
    pub schema_fn: fn() -> Result<Value>,
    #[doc(hidden)]
    pub __sealed: Sealed,
}

inventory::collect!(ModelEntry);

impl ModelEntry {
    /// # Errors
    ///
    /// Propagates the decode or encode failure.
    pub fn roundtrip(&self, value: Value) -> Result<Value> {
        (self.roundtrip_fn)(value)
    }

    /// # Errors
    ///
    /// Propagates the decode failure.
    pub fn summarize(&self, value: Value) -> Result<ModelSummary> {
        (self.summary_fn)(value)
    }

    /// # Errors
    ///
    /// Returns an error if the schema cannot be serialized.
    pub fn schema(&self) -> Result<Value> {
        (self.schema_fn)()
    }

    /// Whether `query` names this entry.
    ///
    /// Names match case-insensitively. Discriminators match exactly, with or
    /// without the leading `#`.
    pub fn matches(&self, query: &str) -> bool {
        if self.name.eq_ignore_ascii_case(query) {
            return true;
        }
        self.odata_type.is_some_and(|tag| {
            tag == query || tag.strip_prefix('#').is_some_and(|bare| bare == query)
        })
    }
}

/// Every registered entry, sorted by name.
pub fn entries() -> Vec<&'static ModelEntry> {
    let mut all: Vec<_> = inventory::iter::<ModelEntry>().collect();
    all.sort_by_key(|entry| entry.name);
    all
}

/// Finds an entry by name or discriminator.
///
/// An exact name match wins over a discriminator match, so a family and its
/// base model, which share a tag, resolve by name.
pub fn find(query: &str) -> Option<&'static ModelEntry> {
    let query = query.trim();
    let all = entries();
    all.iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(query))
        .or_else(|| {
            all.iter()
                .filter(|entry| entry.matches(query))
                .min_by_key(|entry| match entry.kind {
                    ModelKind::Family => 0,
                    ModelKind::Model => 1,
                    ModelKind::Collection => 2,
                })
        })
        .copied()
}

/// Like [`find`], but reports a miss as an error.
///
/// # Errors
///
/// Returns [`ModelError::UnknownModel`] if nothing matches.
pub fn lookup(query: &str) -> Result<&'static ModelEntry> {
    find(query).ok_or_else(|| ModelError::UnknownModel(query.to_owned()))
}
