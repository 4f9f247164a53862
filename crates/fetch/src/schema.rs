use serde::Deserialize;
use std::collections::BTreeMap;

/// Opaque record returned for one identifier. Never inspected here.
pub type EntityRecord = serde_json::Value;

/// Records keyed by identifier, accumulated across chunk requests.
pub type EntityCollection = BTreeMap<String, EntityRecord>;

/// Top-level body of a `wbgetentities` response.
#[derive(Debug, Deserialize)]
pub(crate) struct EntitiesEnvelope {
    pub entities: Option<EntityCollection>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// English label of a record, if the response carried one.
pub fn english_label(record: &EntityRecord) -> Option<&str> {
    record
        .get("labels")?
        .get("en")?
        .get("value")?
        .as_str()
}
