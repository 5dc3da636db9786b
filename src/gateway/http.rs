// file: src/gateway/http.rs
// description: reqwest-backed client for the search gateway REST endpoints
// reference: https://docs.rs/reqwest

use crate::config::GatewayConfig;
use crate::error::{Result, SearchError};
use crate::gateway::{RequestOptions, SearchGateway};
use crate::models::{DocumentText, SearchHit, SearchQuery, UploadPayload, UploadReceipt};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct DocumentBody {
    text: String,
    #[serde(default)]
    s3_file_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get(
        &self,
        path: &str,
        params: &[(&str, &str)],
        options: &RequestOptions,
    ) -> Result<String> {
        let url = self.endpoint(path);

        let mut request = self.client.get(&url).query(params);

        if !options.query_params.is_empty() {
            request = request.query(&options.query_params);
        }

        if let Some(api_key) = &self.config.api_key {
            request = request.header("x-api-key", api_key);
        }

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!("GET {}", url);

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Gateway returned {} for {}", status, url);
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

impl SearchGateway for HttpGateway {
    async fn query(&self, query: &SearchQuery, options: &RequestOptions) -> Result<Vec<SearchHit>> {
        let body = self
            .get(&self.config.query_path, &[("text", query.text.as_str())], options)
            .await?;

        serde_json::from_str(&body)
            .map_err(|e| SearchError::Decode(format!("query response: {}", e)))
    }

    async fn document(&self, document_id: &str, options: &RequestOptions) -> Result<DocumentText> {
        let body = self
            .get(
                &self.config.document_path,
                &[("document_id", document_id)],
                options,
            )
            .await?;

        let decoded: DocumentBody = serde_json::from_str(&body)
            .map_err(|e| SearchError::Decode(format!("document response: {}", e)))?;

        Ok(DocumentText {
            document_id: document_id.to_string(),
            text: decoded.text,
            s3_file_path: decoded.s3_file_path,
        })
    }

    async fn upload(
        &self,
        payload: &UploadPayload,
        options: &RequestOptions,
    ) -> Result<UploadReceipt> {
        let body = self
            .get(
                &self.config.upload_path,
                &[("document", payload.document.as_str())],
                options,
            )
            .await?;

        Ok(UploadReceipt::from_body(&body))
    }
}
