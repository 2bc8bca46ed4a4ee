//! # genui-client — HTTP Schema Source
//!
//! Fetches a named schema document from a configurable endpoint and hands
//! it to the traversal engine. One request, one response: a failure is
//! reported once to the caller and traversal never begins. There is no
//! retry, cancellation, or partial rendering.
//!
//! Documents are served as JSON at `{base_url}/schemas/{name}.json` and
//! may use either the versioned wrapper or the bare-array form.

pub mod config;
pub mod error;

pub use config::{ConfigError, SourceConfig};
pub use error::FetchError;

use std::time::Duration;

use url::Url;

use genui_core::SharedState;
use genui_engine::{Actions, Backend, Panel, UpdateFn};
use genui_schema::Document;

/// Client for a schema source.
#[derive(Debug, Clone)]
pub struct SchemaClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SchemaClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Http {
                name: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch and parse the schema document named `name`.
    ///
    /// Calls `GET {base_url}/schemas/{name}.json`.
    ///
    /// # Errors
    ///
    /// [`FetchError::Status`] for a non-success response,
    /// [`FetchError::Http`] for transport failures, and
    /// [`FetchError::Malformed`] when the body is not a schema document.
    pub async fn fetch(&self, name: &str) -> Result<Document, FetchError> {
        let url = self
            .base_url
            .join(&format!("schemas/{name}.json"))
            .map_err(|e| FetchError::InvalidName {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(schema = %name, url = %url, "fetching schema document");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                name: name.to_string(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                name: name.to_string(),
                status,
                body,
            });
        }

        let body = resp.text().await.map_err(|e| FetchError::Http {
            name: name.to_string(),
            source: e,
        })?;
        body.parse::<Document>().map_err(|e| FetchError::Malformed {
            name: name.to_string(),
            source: e,
        })
    }
}

/// Fetch the schema named `name` and render it into a panel.
///
/// The fetch happens first: on any transport failure the traversal engine
/// is never invoked and no partial panel is built.
///
/// # Errors
///
/// Propagates any [`FetchError`] from [`SchemaClient::fetch`].
pub async fn fetch_and_render(
    client: &SchemaClient,
    name: &str,
    backend: &mut dyn Backend,
    state: SharedState,
    actions: Actions,
    update: UpdateFn,
) -> Result<Panel, FetchError> {
    let document = client.fetch(name).await?;
    Ok(Panel::render(backend, &document, state, actions, update))
}
