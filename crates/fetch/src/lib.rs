pub mod client;
pub mod config;
pub mod error;
pub mod pacing;
pub mod query;
pub mod schema;

pub use client::WikidataClient;
pub use config::FetchConfig;
pub use error::{ErrorKind, FetchError};
pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use query::EntityQuery;
pub use schema::{EntityCollection, EntityRecord, english_label};
