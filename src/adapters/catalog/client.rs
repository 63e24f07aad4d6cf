//! Clients for the bibliographic catalog.
//!
//! Works enter the pipeline either as a local JSON record or by DOI
//! lookup against the catalog's GraphQL endpoint.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::domain::{CatalogError, CatalogWork, ColophonError, Result};

/// Selection of fields the sync pipeline consumes from a catalog work.
const WORK_BY_DOI_QUERY: &str = r#"
query WorkByDoi($doi: String!) {
    workByDoi(doi: $doi) {
        title
        subtitle
        place
        publicationDate
        pageCount
        lccn
        landingPage
        doi
        imprint {
            publisher {
                publisherName
            }
        }
        contributions {
            contributionType
            fullName
            firstName
            lastName
        }
        subjects {
            subjectType
            subjectCode
            subjectOrdinal
        }
        publications {
            publicationType
            isbn
        }
    }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<WorkData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct WorkData {
    #[serde(rename = "workByDoi")]
    work_by_doi: Option<CatalogWork>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Loads a catalog work from a JSON record on disk.
///
/// # Arguments
///
/// * `path` - Path to a file holding one work in the catalog's JSON shape
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] when the file does not exist and
/// [`CatalogError::InvalidRecord`] when it cannot be parsed as a work.
pub fn load_work(path: impl AsRef<Path>) -> Result<CatalogWork> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::NotFound(path.display().to_string()).into());
    }

    let contents = fs::read_to_string(path)?;
    let work = serde_json::from_str::<CatalogWork>(&contents)
        .map_err(|e| CatalogError::InvalidRecord(format!("{}: {}", path.display(), e)))?;

    info!(title = %work.title, doi = %work.doi, "catalog record loaded");
    Ok(work)
}

/// HTTP client for the catalog's GraphQL endpoint.
pub struct CatalogClient {
    endpoint: String,
    client: Client,
}

impl CatalogClient {
    /// Builds a client for the configured catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no endpoint is set; the
    /// catalog section is optional for runs that read records from disk.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let endpoint = config.endpoint.clone().ok_or_else(|| {
            ColophonError::Configuration(
                "catalog endpoint is not configured; set catalog.endpoint or sync from a record file"
                    .to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    /// Fetches one work from the catalog by its DOI.
    ///
    /// # Arguments
    ///
    /// * `doi` - Full DOI URL or bare DOI, as the catalog indexes it
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the catalog holds no work
    /// under that DOI, and [`CatalogError::QueryFailed`] when the
    /// endpoint reports an error.
    pub async fn fetch_work_by_doi(&self, doi: &str) -> Result<CatalogWork> {
        debug!(doi = %doi, "querying catalog");

        let request = serde_json::json!({
            "query": WORK_BY_DOI_QUERY,
            "variables": { "doi": doi },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::QueryFailed(format!(
                "catalog returned status {}: {}",
                status, body
            ))
            .into());
        }

        let parsed = response
            .json::<GraphQlResponse>()
            .await
            .map_err(|e| CatalogError::InvalidRecord(format!("catalog response: {}", e)))?;

        if let Some(error) = parsed.errors.first() {
            return Err(CatalogError::QueryFailed(error.message.clone()).into());
        }

        match parsed.data.and_then(|data| data.work_by_doi) {
            Some(work) => {
                info!(title = %work.title, doi = %doi, "catalog record fetched");
                Ok(work)
            }
            None => Err(CatalogError::NotFound(doi.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn work_json() -> serde_json::Value {
        serde_json::json!({
            "title": "The Meadow",
            "subtitle": "A Field Guide",
            "place": "Cambridge, UK",
            "publicationDate": "2020-05-01",
            "pageCount": 244,
            "lccn": "2020012345",
            "landingPage": "https://press.example/meadow",
            "doi": "https://doi.org/10.1234/xyz",
            "imprint": { "publisher": { "publisherName": "Meadow Press" } },
            "contributions": [
                {
                    "contributionType": "AUTHOR",
                    "fullName": "Jane Example",
                    "firstName": "Jane",
                    "lastName": "Example"
                }
            ],
            "subjects": [
                { "subjectType": "KEYWORD", "subjectCode": "open access", "subjectOrdinal": 1 }
            ],
            "publications": [
                { "publicationType": "PAPERBACK", "isbn": "978-1-234-56789-7" }
            ]
        })
    }

    #[test]
    fn test_load_work_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", work_json()).unwrap();

        let work = load_work(file.path()).unwrap();

        assert_eq!(work.title, "The Meadow");
        assert_eq!(work.publisher_name(), "Meadow Press");
        assert_eq!(work.contributions.len(), 1);
    }

    #[test]
    fn test_load_work_missing_file() {
        let result = load_work("/nonexistent/record.json");

        assert!(matches!(
            result,
            Err(ColophonError::Catalog(CatalogError::NotFound(_)))
        ));
    }

    #[test]
    fn test_load_work_rejects_malformed_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"title\": 42}}").unwrap();

        let result = load_work(file.path());

        assert!(matches!(
            result,
            Err(ColophonError::Catalog(CatalogError::InvalidRecord(_)))
        ));
    }

    #[test]
    fn test_new_requires_endpoint() {
        let config = CatalogConfig::default();

        let result = CatalogClient::new(&config);

        assert!(matches!(result, Err(ColophonError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_fetch_work_by_doi() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({ "data": { "workByDoi": work_json() } });
        let mock = server
            .mock("POST", "/graphql")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "variables": { "doi": "https://doi.org/10.1234/xyz" }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let config = CatalogConfig {
            endpoint: Some(format!("{}/graphql", server.url())),
            timeout_seconds: 10,
        };
        let client = CatalogClient::new(&config).unwrap();
        let work = client
            .fetch_work_by_doi("https://doi.org/10.1234/xyz")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(work.title, "The Meadow");
        assert_eq!(work.bare_doi(), "10.1234/xyz");
    }

    #[tokio::test]
    async fn test_fetch_work_by_doi_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{"workByDoi":null}}"#)
            .create_async()
            .await;

        let config = CatalogConfig {
            endpoint: Some(format!("{}/graphql", server.url())),
            timeout_seconds: 10,
        };
        let client = CatalogClient::new(&config).unwrap();
        let result = client.fetch_work_by_doi("https://doi.org/10.9999/none").await;

        assert!(matches!(
            result,
            Err(ColophonError::Catalog(CatalogError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_fetch_work_by_doi_reports_query_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors":[{"message":"Invalid DOI"}]}"#)
            .create_async()
            .await;

        let config = CatalogConfig {
            endpoint: Some(format!("{}/graphql", server.url())),
            timeout_seconds: 10,
        };
        let client = CatalogClient::new(&config).unwrap();
        let result = client.fetch_work_by_doi("not-a-doi").await;

        match result {
            Err(ColophonError::Catalog(CatalogError::QueryFailed(message))) => {
                assert_eq!(message, "Invalid DOI");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
