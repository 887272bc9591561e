use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Wire key of the discriminator property.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Properties a decoder did not recognize, in the order they were read.
pub type AdditionalData = Map<String, Value>;

/// Access to the open map of properties outside a type's declared schema.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    /// Looks up a single unrecognized property.
    fn additional_value(&self, key: &str) -> Option<&Value> {
        self.additional_data().get(key)
    }
}

/// A Graph wire type: a declared model, a discriminated family, or a
/// collection envelope.
///
/// Implementations are generated by `#[model]` and `define_family!`; writing
/// one by hand is only needed for envelope types.
pub trait Model: AdditionalDataHolder + Serialize + DeserializeOwned + JsonSchema {
    /// Rust-side name of the type.
    const MODEL_NAME: &'static str;

    /// Discriminator written by freshly constructed instances, if the type has
    /// one.
    const ODATA_TYPE: Option<&'static str>;

    /// Discriminator carried by this instance.
    fn odata_type(&self) -> Option<&str>;

    /// Name of the concrete type behind this value. Families report their
    /// resolved variant.
    fn model_name(&self) -> &'static str {
        Self::MODEL_NAME
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::Widget;

    #[test]
    fn test_additional_value_reads_unrecognized_property() {
        // Arrange
        let mut widget = Widget::named("gear");
        widget
            .additional_data_mut()
            .insert("colour".to_owned(), json!("teal"));

        // Act
        let colour = widget.additional_value("colour");

        // Assert
        assert_eq!(colour, Some(&json!("teal")));
        assert_eq!(widget.additional_value("displayName"), None);
    }

    #[test]
    fn test_model_name_defaults_to_associated_constant() {
        let widget = Widget::named("gear");

        assert_eq!(widget.model_name(), "Widget");
        assert_eq!(Widget::ODATA_TYPE, Some("#microsoft.graph.widget"));
    }
}
