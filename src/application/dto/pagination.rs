use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PagedResponse<T> {
    pub page_number: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub data: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// `page_size` reports how many items this page actually carries.
    pub fn new(page_number: i64, total_records: i64, data: Vec<T>) -> Self {
        let page_size = i64::try_from(data.len()).unwrap_or(i64::MAX);
        Self {
            page_number,
            page_size,
            total_records,
            data,
        }
    }
}
