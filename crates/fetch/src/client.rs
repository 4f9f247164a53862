use reqwest::header::USER_AGENT;
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::pacing::{FixedDelay, Pacer};
use crate::query::{EntityQuery, chunk_ids};
use crate::schema::{EntitiesEnvelope, EntityCollection, EntityRecord};

/// Client for the Wikidata `wbgetentities` endpoint.
///
/// Requests are issued strictly one at a time; `P` decides how long to wait
/// between consecutive chunks.
#[derive(Clone)]
pub struct WikidataClient<P = FixedDelay> {
    endpoint: String,
    user_agent: String,
    chunk_size: usize,
    client: reqwest::Client,
    pacer: P,
}

impl WikidataClient<FixedDelay> {
    pub fn new(config: FetchConfig) -> Self {
        let pacer = config.pacer();
        Self {
            endpoint: config.endpoint,
            user_agent: config.user_agent,
            chunk_size: config.chunk_size,
            client: reqwest::Client::new(),
            pacer,
        }
    }
}

impl Default for WikidataClient<FixedDelay> {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl<P: Pacer> WikidataClient<P> {
    pub fn with_pacer<Q: Pacer>(self, pacer: Q) -> WikidataClient<Q> {
        WikidataClient {
            endpoint: self.endpoint,
            user_agent: self.user_agent,
            chunk_size: self.chunk_size,
            client: self.client,
            pacer,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Fetch a single entity record
    pub async fn fetch_entity(&self, id: &str) -> Result<EntityRecord, FetchError> {
        let mut entities = self.fetch_entities_chunked(&[id], 1).await?;
        entities
            .remove(id)
            .ok_or_else(|| FetchError::EntityNotFound(id.to_string()))
    }

    /// Fetch many entities using the configured chunk size
    pub async fn fetch_entities<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<EntityCollection, FetchError> {
        self.fetch_entities_chunked(ids, self.chunk_size).await
    }

    /// Fetch many entities, at most `chunk_size` identifiers per request.
    ///
    /// Fails on the first transport or parse error; nothing gathered from
    /// earlier chunks is returned in that case. Identifiers the service does
    /// not return are left out of the collection.
    pub async fn fetch_entities_chunked<S: AsRef<str>>(
        &self,
        ids: &[S],
        chunk_size: usize,
    ) -> Result<EntityCollection, FetchError> {
        if chunk_size == 0 {
            return Err(FetchError::InvalidChunkSize);
        }

        let mut all_entities = EntityCollection::new();
        let mut requests = 0;

        for (index, chunk) in chunk_ids(ids, chunk_size).enumerate() {
            if index > 0 {
                self.pacer.pause().await;
            }

            let query = EntityQuery::new(chunk);
            debug!(chunk = index, size = chunk.len(), "Fetching entity chunk");

            let entities = self.fetch_chunk(&query).await?;
            requests += 1;

            for id in query.ids() {
                if !entities.contains_key(id) {
                    debug!(id = %id, "Entity missing from response");
                }
            }

            all_entities.extend(entities);
        }

        info!(
            requested = ids.len(),
            resolved = all_entities.len(),
            requests = requests,
            "Fetched entities"
        );

        Ok(all_entities)
    }

    async fn fetch_chunk(&self, query: &EntityQuery) -> Result<EntityCollection, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.params())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: EntitiesEnvelope = serde_json::from_str(&body)?;

        if let Some(error) = envelope.error {
            return Err(FetchError::Api {
                code: error.code,
                info: error.info,
            });
        }

        envelope.entities.ok_or(FetchError::MissingEnvelope)
    }
}
