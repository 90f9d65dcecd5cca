use reqwest::Client;

use crate::LogLevel;
use crate::catalog::parse::first_result;
use crate::records::clean::FetchResource;
use crate::records::value::Record;

/// HTTP client for read-only catalog lookups.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    log_level: LogLevel,
}

impl CatalogClient {
    /// Create a new client for the given catalog endpoint.
    pub fn new(base_url: &str, log_level: LogLevel) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Fetch a single resource by URL, optionally appending query parameters.
    pub async fn get_resource(
        &self,
        url: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<Record, String> {
        let mut url = url.to_string();
        if let Some(pairs) = params {
            let mut separator = '?';
            for (name, value) in pairs {
                url.push(separator);
                url.push_str(name);
                url.push('=');
                url.push_str(&urlencoding::encode(value));
                separator = '&';
            }
        }

        if matches!(self.log_level, LogLevel::Debug) {
            println!("Url: {:?}", url);
        }

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("Catalog API error ({}): {}", status, body));
        }

        resp.json::<Record>()
            .await
            .map_err(|e| format!("Failed to parse JSON: {e}"))
    }

    /// Search a collection by term and return the raw response envelope.
    pub async fn search(&self, collection: &str, term: &str) -> Result<Record, String> {
        if matches!(self.log_level, LogLevel::Debug) {
            println!("Search {}: {:?}", collection, term);
        }

        let url = format!("{}/{}/", self.base_url, collection);
        self.get_resource(&url, Some(&[("search", term)])).await
    }

    /// Search a collection by term and return the first matching record.
    pub async fn search_one(&self, collection: &str, term: &str) -> Result<Record, String> {
        let envelope = self.search(collection, term).await?;
        first_result(envelope)
    }
}

impl FetchResource for CatalogClient {
    /// Fetch the record behind a resource URL.
    async fn fetch_record(&self, url: &str) -> Result<Record, String> {
        self.get_resource(url, None).await
    }
}
