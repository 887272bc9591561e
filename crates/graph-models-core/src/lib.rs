//! # Graph Models Core
//!
//! Runtime support shared by every Microsoft Graph model type. This crate
//! holds no model types itself; those live in `graph-models` and are declared
//! with the `#[model]` and `define_family!` macros, whose expansions call into
//! the items here.
//!
//! ## Pieces
//!
//! - [`Model`] and [`AdditionalDataHolder`]: the traits every generated type
//!   implements
//! - [`codec`]: decode / encode entry points that report the failing type
//! - [`family`]: helpers for discriminator (`@odata.type`) dispatch
//! - [`CollectionResponse`] and [`PageIterator`]: paged collection envelopes
//! - [`primitives`]: wire types Graph uses that serde has no native form for
//! - [`diff`]: structural JSON comparison used to verify round trips
//! - [`registry`]: the inventory of declared models, used by tooling
//!
//! ## Wire Rules
//!
//! Every property is optional. Unknown keys are captured in an ordered
//! additional-data map and written back unchanged. Explicit `null` on a
//! declared property reads as absent.
//!
//! ```ignore
//! use graph_models_core::{codec, Model};
//!
//! let stage: AccessPackageApprovalStage = codec::decode(json)?;
//! assert!(stage.additional_data().contains_key("customUnknownField"));
//! let again = codec::encode(&stage)?;
//! ```

pub mod codec;
pub mod collection;
pub mod diff;
mod error;
pub mod family;
mod model;
pub mod paging;
pub mod primitives;
pub mod registry;

pub use codec::{
    ModelSummary, decode, decode_slice, decode_value, encode, encode_pretty, encode_value,
};
pub use collection::{BaseCollectionPaginationCountResponse, CollectionResponse};
pub use error::{ModelError, Result};
pub use model::{AdditionalData, AdditionalDataHolder, Model, ODATA_TYPE_KEY};
pub use paging::{PageIterator, PageSource};
pub use primitives::{Base64Binary, DateTimeOffset, IsoDuration, TimeOnly};
pub use registry::{ModelEntry, ModelKind};

/// Items referenced by macro expansions. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use schemars;
    pub use serde;
    pub use serde_json;

    pub use crate::{
        codec::{decode_value, roundtrip_value, schema_value, summarize},
        family::{discriminator_of, note_fallback, tag_matches},
        registry::{ModelEntry, ModelKind, Sealed},
    };

    #[inline]
    #[must_use]
    pub const fn sealed() -> Sealed {
        Sealed(())
    }
}
