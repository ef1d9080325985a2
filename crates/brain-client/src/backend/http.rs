//! HTTP implementation of the backend contract

use async_trait::async_trait;
use brain_types::{
    AnalyticsSummary, Document, MaintenanceIssue, Property, PropertyDetail, QueryRequest,
    QueryResult, ServiceStatus, UploadResponse,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::Backend;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::upload::UploadFile;

/// Backend reached over HTTP at a single fixed origin
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Build a backend for the configured origin
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL does not parse, or
    /// [`ClientError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("base_url {base_url:?}: {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &'static str, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::decode(resource, response).await
    }

    /// Reject non-success statuses, then decode the body
    async fn decode<T: DeserializeOwned>(resource: &'static str, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { resource, source })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        self.get_json("properties", &self.url("/api/properties")).await
    }

    async fn list_maintenance(&self) -> Result<Vec<MaintenanceIssue>> {
        self.get_json("maintenance", &self.url("/api/maintenance")).await
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.get_json("documents", &self.url("/api/documents")).await
    }

    async fn analytics(&self) -> Result<AnalyticsSummary> {
        self.get_json("analytics", &self.url("/api/analytics")).await
    }

    async fn submit_query(&self, request: &QueryRequest) -> Result<QueryResult> {
        let url = self.url("/api/query");
        debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        Self::decode("query", response).await
    }

    async fn upload(&self, file: &UploadFile, property_id: &str) -> Result<UploadResponse> {
        let url = self.url("/api/upload");
        debug!("POST {} ({} bytes, property {})", url, file.len(), property_id);

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.filename().to_string())
            .mime_str(file.content_type())?;
        let form = Form::new()
            .part("file", part)
            .text("property_id", property_id.to_string());

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        // A soft failure still carries a message worth showing
        match serde_json::from_slice::<UploadResponse>(&body) {
            Ok(parsed) => {
                if !status.is_success() {
                    warn!(status = status.as_u16(), "upload reported failure: {}", parsed.message);
                }
                Ok(parsed)
            }
            Err(_) if !status.is_success() => Err(ClientError::Status {
                resource: "upload",
                status: status.as_u16(),
            }),
            Err(source) => Err(ClientError::Decode {
                resource: "upload",
                source,
            }),
        }
    }

    async fn property_detail(&self, property_id: &str) -> Result<PropertyDetail> {
        let mut url = Url::parse(&self.url("/api/properties"))
            .map_err(|e| ClientError::Config(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("{} cannot take a path", self.base_url)))?
            .push(property_id);

        self.get_json("property", url.as_str()).await
    }

    async fn service_status(&self) -> Result<ServiceStatus> {
        self.get_json("status", &self.url("/")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = ClientConfig::default().with_base_url(Some("http://localhost:8000///".into()));
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.url("/api/query"), "http://localhost:8000/api/query");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = ClientConfig::default().with_base_url(Some("not a url".into()));
        let err = HttpBackend::new(&config).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let config =
            ClientConfig::default().with_base_url(Some("https://example.com/brain/".into()));
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(
            backend.url("/api/properties"),
            "https://example.com/brain/api/properties"
        );
    }
}
