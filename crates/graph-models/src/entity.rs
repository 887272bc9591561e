//! The root of every Graph entity type.

use crate::model;

/// An entity whose more specific type is not modelled here.
///
/// Navigation properties typed with this keep the entity's `@odata.type` and
/// every other property in additional data, so they still round-trip intact.
#[model(odata_type = "#microsoft.graph.entity")]
pub struct Entity {
    pub id: Option<String>,
}
