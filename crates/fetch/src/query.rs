pub const ACTION: &str = "wbgetentities";
pub const FORMAT: &str = "json";
pub const LANGUAGES: &str = "en";
pub const PROPS: &str = "labels|descriptions|claims|sitelinks";
pub const ID_SEPARATOR: &str = "|";

/// One `wbgetentities` request covering a single chunk of identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityQuery {
    ids: Vec<String>,
}

impl EntityQuery {
    pub fn new<S: AsRef<str>>(ids: &[S]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.as_ref().to_string()).collect(),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Identifiers joined the way the API expects them in `ids`
    pub fn joined_ids(&self) -> String {
        self.ids.join(ID_SEPARATOR)
    }

    /// Query string parameters, in the order they are sent
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("action", ACTION.to_string()),
            ("ids", self.joined_ids()),
            ("format", FORMAT.to_string()),
            ("languages", LANGUAGES.to_string()),
            ("props", PROPS.to_string()),
        ]
    }
}

/// Split identifiers into consecutive chunks of at most `chunk_size`, keeping order.
///
/// `chunk_size` must be non-zero; callers validate it first.
pub fn chunk_ids<S>(ids: &[S], chunk_size: usize) -> impl Iterator<Item = &[S]> {
    ids.chunks(chunk_size)
}
