use anyhow::{Context, Result};
use fetch::{EntityCollection, Pacer, WikidataClient, english_label};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Entity fetched when no subcommand is given (China)
pub const EXAMPLE_ENTITY: &str = "Q148";
/// Batch fetched when no subcommand is given (China, USA, UK)
pub const EXAMPLE_BATCH: [&str; 3] = ["Q148", "Q30", "Q145"];

pub async fn fetch_one<P: Pacer>(
    client: &WikidataClient<P>,
    id: &str,
    data_dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    let record = client
        .fetch_entity(id)
        .await
        .with_context(|| format!("Failed to fetch entity {}", id))?;

    let path = store::save_json(data_dir, filename, &record)
        .await
        .context("Failed to save entity")?;

    println!("✅ {} saved to {}", id, path.display());
    Ok(path)
}

pub async fn fetch_many<P: Pacer, S: AsRef<str>>(
    client: &WikidataClient<P>,
    ids: &[S],
    data_dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    let entities = client
        .fetch_entities(ids)
        .await
        .with_context(|| format!("Failed to fetch {} entities", ids.len()))?;

    let path = store::save_json(data_dir, filename, &entities)
        .await
        .context("Failed to save entities")?;

    println!(
        "✅ {}/{} entities saved to {}",
        entities.len(),
        ids.len(),
        path.display()
    );
    Ok(path)
}

/// The two example retrievals run when no subcommand is given
pub async fn run_examples<P: Pacer>(client: &WikidataClient<P>, data_dir: &Path) -> Result<()> {
    fetch_one(client, EXAMPLE_ENTITY, data_dir, "china_data.json").await?;
    fetch_many(client, &EXAMPLE_BATCH, data_dir, "countries_data.json").await?;
    Ok(())
}

/// Print the English labels found in a saved file.
///
/// Accepts either a single record or a collection keyed by identifier.
pub async fn show(path: &Path) -> Result<Vec<(String, String)>> {
    let value: Value = store::load_json(path)
        .await
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let rows = describe(&value)
        .with_context(|| format!("{} does not hold entity data", path.display()))?;

    println!("{} entities in {}", rows.len(), path.display());
    for (id, label) in &rows {
        println!("  {}: {}", id, label);
    }
    Ok(rows)
}

fn describe(value: &Value) -> Option<Vec<(String, String)>> {
    let label_of = |record: &Value| english_label(record).unwrap_or("(no label)").to_string();

    // A saved record carries its own id; a collection is keyed by id instead.
    if let Some(id) = value.get("id").and_then(Value::as_str) {
        return Some(vec![(id.to_string(), label_of(value))]);
    }

    let collection: EntityCollection = serde_json::from_value(value.clone()).ok()?;
    if !collection.values().all(Value::is_object) {
        return None;
    }

    Some(
        collection
            .iter()
            .map(|(id, record)| (id.clone(), label_of(record)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fetch::{FetchConfig, NoDelay};
    use serde_json::json;
    use wiremock::matchers::query_param;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn labelled(id: &str, label: &str) -> Value {
        json!({"id": id, "labels": {"en": {"language": "en", "value": label}}})
    }

    fn client_for(server: &MockServer) -> WikidataClient<NoDelay> {
        let config = FetchConfig {
            endpoint: server.uri(),
            ..FetchConfig::default()
        };
        WikidataClient::new(config).with_pacer(NoDelay)
    }

    #[tokio::test]
    async fn test_run_examples_writes_both_files() {
        let server = MockServer::start().await;
        Mock::given(query_param("ids", "Q148"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entities": {"Q148": labelled("Q148", "People's Republic of China")}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(query_param("ids", "Q148|Q30|Q145"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entities": {
                    "Q148": labelled("Q148", "People's Republic of China"),
                    "Q30": labelled("Q30", "United States"),
                    "Q145": labelled("Q145", "United Kingdom")
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        run_examples(&client_for(&server), &data_dir).await.unwrap();

        let china: Value = store::load_json(&data_dir.join("china_data.json"))
            .await
            .unwrap();
        assert_eq!(china, labelled("Q148", "People's Republic of China"));

        let rows = show(&data_dir.join("countries_data.json")).await.unwrap();
        assert_eq!(
            rows,
            vec![
                ("Q145".to_string(), "United Kingdom".to_string()),
                ("Q148".to_string(), "People's Republic of China".to_string()),
                ("Q30".to_string(), "United States".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(query_param("ids", "Q1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let result = fetch_many(&client_for(&server), &["Q1"], dir.path(), "out.json").await;

        assert!(result.is_err());
        assert!(!dir.path().join("out.json").exists());
    }

    #[test]
    fn test_describe_single_record() {
        let rows = describe(&labelled("Q30", "United States")).unwrap();
        assert_eq!(rows, vec![("Q30".to_string(), "United States".to_string())]);
    }

    #[test]
    fn test_describe_rejects_non_entity_data() {
        assert!(describe(&json!([1, 2, 3])).is_none());
        assert!(describe(&json!({"success": 1, "warnings": "none"})).is_none());
    }

    #[test]
    fn test_describe_missing_entity_record() {
        let rows = describe(&json!({"id": "Q0", "missing": ""})).unwrap();
        assert_eq!(rows, vec![("Q0".to_string(), "(no label)".to_string())]);
    }

    #[test]
    fn test_describe_collection_with_missing_entry() {
        let rows = describe(&json!({
            "Q0": {"id": "Q0", "missing": ""},
            "Q30": labelled("Q30", "United States")
        }))
        .unwrap();

        assert_eq!(
            rows,
            vec![
                ("Q0".to_string(), "(no label)".to_string()),
                ("Q30".to_string(), "United States".to_string()),
            ]
        );
    }
}
