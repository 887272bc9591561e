//! Paged collection envelopes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AdditionalData, AdditionalDataHolder, Model};

/// Wire key of the next-page link.
pub const ODATA_NEXT_LINK_KEY: &str = "@odata.nextLink";
/// Wire key of the total item count.
pub const ODATA_COUNT_KEY: &str = "@odata.count";
/// Wire key of the delta link returned on the last page of a delta query.
pub const ODATA_DELTA_LINK_KEY: &str = "@odata.deltaLink";

/// Pagination metadata shared by every collection response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BaseCollectionPaginationCountResponse {
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
}

/// A page of `T` plus pagination metadata.
///
/// Other envelope keys such as `@odata.context` or `@odata.deltaLink` land in
/// [`additional_data`](Self::additional_data) and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CollectionResponse<T> {
    #[serde(flatten)]
    pub pagination: BaseCollectionPaginationCountResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<T>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            pagination: BaseCollectionPaginationCountResponse::default(),
            value: None,
            additional_data: AdditionalData::new(),
        }
    }
}

impl<T> CollectionResponse<T> {
    /// Builds a single page holding `items`.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            value: Some(items),
            ..Self::default()
        }
    }

    /// Sets the next-page link.
    #[must_use]
    pub fn with_next_link(mut self, link: impl Into<String>) -> Self {
        self.pagination.odata_next_link = Some(link.into());
        self
    }

    /// Items on this page; empty when `value` was absent.
    pub fn items(&self) -> &[T] {
        self.value.as_deref().unwrap_or_default()
    }

    /// Consumes the page and returns its items.
    pub fn into_items(self) -> Vec<T> {
        self.value.unwrap_or_default()
    }

    pub fn next_link(&self) -> Option<&str> {
        self.pagination.odata_next_link.as_deref()
    }

    pub fn count(&self) -> Option<i64> {
        self.pagination.odata_count
    }

    /// Delta link, present on the final page of a delta query.
    pub fn delta_link(&self) -> Option<&str> {
        self.additional_data
            .get(ODATA_DELTA_LINK_KEY)
            .and_then(serde_json::Value::as_str)
    }
}

impl<T> AdditionalDataHolder for CollectionResponse<T> {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl<T: Model> Model for CollectionResponse<T> {
    const MODEL_NAME: &'static str = "CollectionResponse";
    const ODATA_TYPE: Option<&'static str> = None;

    fn odata_type(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{codec, testing::Widget};

    #[test]
    fn test_element_type_needs_no_default() {
        // Arrange
        let input = json!({"value": [{"size": 7}]});

        // Act
        let page: CollectionResponse<Widget> =
            codec::decode_value(input).expect("Widget has no Default impl");

        // Assert
        assert_eq!(page.model_name(), "CollectionResponse");
        assert_eq!(page.items()[0].size, Some(7));
    }

    #[test]
    fn test_decode_collection_reads_pagination_and_items() {
        // Arrange
        let input = json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#widgets",
            "@odata.count": 42,
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/widgets?$skiptoken=X",
            "value": [
                {"displayName": "gear"},
                {"displayName": "cog", "size": 2}
            ]
        });

        // Act
        let page: CollectionResponse<Widget> =
            codec::decode_value(input).expect("decode should succeed");

        // Assert
        assert_eq!(page.count(), Some(42));
        assert_eq!(
            page.next_link(),
            Some("https://graph.microsoft.com/v1.0/widgets?$skiptoken=X")
        );
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.items()[1].size, Some(2));
        assert_eq!(page.additional_data.len(), 1);
        assert!(page.additional_data.contains_key("@odata.context"));
    }

    #[test]
    fn test_collection_roundtrip_keeps_envelope_keys_once() {
        // Arrange
        let input = json!({
            "@odata.count": 1,
            "value": [{"displayName": "gear", "extra": true}],
            "@odata.deltaLink": "https://graph.microsoft.com/v1.0/widgets/delta?$deltatoken=Z"
        });

        // Act
        let output = codec::roundtrip_value::<CollectionResponse<Widget>>(input.clone())
            .expect("roundtrip should succeed");

        // Assert
        assert_eq!(output, input);
        let object = output.as_object().expect("output should be an object");
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn test_delta_link_is_read_from_additional_data() {
        let page: CollectionResponse<Widget> = codec::decode_value(json!({
            "value": [],
            "@odata.deltaLink": "https://graph.microsoft.com/v1.0/widgets/delta?$deltatoken=Z"
        }))
        .expect("decode should succeed");

        assert_eq!(
            page.delta_link(),
            Some("https://graph.microsoft.com/v1.0/widgets/delta?$deltatoken=Z")
        );
        assert_eq!(page.next_link(), None);
    }

    #[test]
    fn test_absent_value_reads_as_empty_items() {
        let page: CollectionResponse<Widget> =
            codec::decode_value(json!({})).expect("decode should succeed");

        assert!(page.value.is_none());
        assert!(page.items().is_empty());
        assert!(page.into_items().is_empty());
    }

    #[test]
    fn test_from_items_with_next_link_encodes_envelope() {
        // Arrange
        let page = CollectionResponse::from_items(vec![Widget::named("gear")])
            .with_next_link("https://example.test/next");

        // Act
        let encoded = codec::encode_value(&page).expect("encode should succeed");

        // Assert
        assert_eq!(
            encoded,
            json!({
                "@odata.nextLink": "https://example.test/next",
                "value": [{"displayName": "gear"}]
            })
        );
    }
}
