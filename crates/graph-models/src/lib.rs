//! # Graph Models
//!
//! Typed Microsoft Graph entities and complex types with lossless JSON round
//! tripping. Each type keeps every property optional, captures keys it does
//! not declare in an ordered additional-data map, and writes both back out.
//!
//! ## Polymorphic Properties
//!
//! Properties typed as a Graph base type hold a family enum. Decoding reads
//! `@odata.type` and picks the matching variant, or the `Base` variant when
//! the tag is absent or unknown:
//!
//! ```ignore
//! use graph_models::{SubjectSet, decode};
//!
//! let set: SubjectSet = decode(r##"{"@odata.type":"#microsoft.graph.singleUser"}"##)?;
//! assert!(matches!(set, SubjectSet::SingleUser(_)));
//! ```
//!
//! ## Modules
//!
//! - [`directory`]: applications, service principals and directory objects
//! - [`entity`]: the generic entity used for navigation properties whose
//!   types are not modelled
//! - [`identity_governance`]: access package policies and subject sets
//! - [`device_management`]: Intune device configurations and Windows
//!   Information Protection
//! - [`odata_errors`]: the Graph error body
//! - [`collections`]: typed collection responses

// Allow proc-macro expansions within this crate to refer to it via `::graph_models`.
extern crate self as graph_models;

pub mod collections;
pub mod device_management;
pub mod directory;
pub mod entity;
pub mod identity_governance;
pub mod odata_errors;

pub use collections::*;
pub use device_management::*;
pub use directory::*;
pub use entity::*;
pub use graph_models_core::{
    AdditionalData, AdditionalDataHolder, Base64Binary, BaseCollectionPaginationCountResponse,
    CollectionResponse, DateTimeOffset, IsoDuration, Model, ModelEntry, ModelError, ModelKind,
    ModelSummary, ODATA_TYPE_KEY, PageIterator, PageSource, Result, TimeOnly, codec, collection,
    decode, decode_slice, decode_value, diff, encode, encode_pretty, encode_value, family, paging,
    primitives, registry,
};
pub use graph_models_macro::{define_family, model};
pub use identity_governance::*;
pub use odata_errors::*;

#[doc(hidden)]
pub mod __private {
    pub use graph_models_core::__private::*;
}
