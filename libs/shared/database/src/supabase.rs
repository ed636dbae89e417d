use anyhow::{Result, anyhow};
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Document-store client over the PostgREST API. Each collection is a table
/// under `/rest/v1/{collection}`; filters are equality matches.
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            service_key: config.supabase_service_key.clone(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", HeaderValue::from_str(&self.service_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.service_key))?,
        );

        Ok(headers)
    }

    fn collection_url(&self, collection: &str, filters: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/rest/v1/{}", self.base_url, collection))?;

        if !filters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (column, value) in filters {
                pairs.append_pair(column, &format!("eq.{}", value));
            }
        }

        Ok(url)
    }

    fn prefer(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static(value));
        headers
    }

    async fn execute<T>(&self, method: Method, url: Url, body: Option<Value>,
                        extra_headers: Option<HeaderMap>)
                        -> Result<T>
    where T: DeserializeOwned {
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers()?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                409 => anyhow!("Conflict: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// All documents in `collection` matching every `(column, value)` pair.
    pub async fn select<T>(&self, collection: &str, filters: &[(&str, &str)]) -> Result<Vec<T>>
    where T: DeserializeOwned {
        let url = self.collection_url(collection, filters)?;
        self.execute(Method::GET, url, None, None).await
    }

    pub async fn select_one<T>(&self, collection: &str, filters: &[(&str, &str)]) -> Result<Option<T>>
    where T: DeserializeOwned {
        let rows: Vec<T> = self.select(collection, filters).await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts one document and returns it as stored.
    pub async fn insert<T>(&self, collection: &str, document: Value) -> Result<T>
    where T: DeserializeOwned {
        let url = self.collection_url(collection, &[])?;
        let rows: Vec<T> = self.execute(
            Method::POST,
            url,
            Some(document),
            Some(Self::prefer("return=representation")),
        ).await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| anyhow!("Insert into {} returned no document", collection))
    }

    /// Inserts or merges a document keyed by `on_conflict`.
    pub async fn upsert<T>(&self, collection: &str, document: Value, on_conflict: &str) -> Result<T>
    where T: DeserializeOwned {
        let mut url = self.collection_url(collection, &[])?;
        url.query_pairs_mut().append_pair("on_conflict", on_conflict);

        let rows: Vec<T> = self.execute(
            Method::POST,
            url,
            Some(document),
            Some(Self::prefer("resolution=merge-duplicates,return=representation")),
        ).await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| anyhow!("Upsert into {} returned no document", collection))
    }

    /// Applies `patch` to every matching document and returns the updated ones.
    pub async fn update<T>(&self, collection: &str, filters: &[(&str, &str)], patch: Value) -> Result<Vec<T>>
    where T: DeserializeOwned {
        let url = self.collection_url(collection, filters)?;
        self.execute(
            Method::PATCH,
            url,
            Some(patch),
            Some(Self::prefer("return=representation")),
        ).await
    }

    /// Deletes matching documents, returning how many were removed.
    pub async fn delete(&self, collection: &str, filters: &[(&str, &str)]) -> Result<usize> {
        if filters.is_empty() {
            return Err(anyhow!("Refusing unfiltered delete on {}", collection));
        }

        let url = self.collection_url(collection, filters)?;
        let removed: Vec<Value> = self.execute(
            Method::DELETE,
            url,
            None,
            Some(Self::prefer("return=representation")),
        ).await?;

        Ok(removed.len())
    }
}
