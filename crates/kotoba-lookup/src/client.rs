use kotoba_config::lookup::LookupConfig;

use crate::error::LookupError;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::types::{RemoteWord, SearchResponse};

/// Client for the jisho.org-style word search API
#[derive(Clone)]
pub struct JishoClient<T = ReqwestTransport> {
    transport: T,
    search_url: String,
    config: LookupConfig,
}

impl JishoClient<ReqwestTransport> {
    pub fn new(config: LookupConfig) -> Self {
        Self::with_transport(ReqwestTransport::new(), config)
    }
}

impl<T: HttpTransport> JishoClient<T> {
    pub fn with_transport(transport: T, config: LookupConfig) -> Self {
        Self {
            transport,
            search_url: config.search_url(),
            config,
        }
    }

    /// Search words matching `keyword`.
    ///
    /// An empty result list is a success, not an error.
    pub async fn search(&self, keyword: &str) -> Result<Vec<RemoteWord>, LookupError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            tracing::warn!("Empty keyword passed to search, skipping request");
            return Ok(Vec::new());
        }

        let request = HttpRequest {
            url: self.search_url.clone(),
            query: vec![("keyword".to_string(), keyword.to_string())],
            timeout: self.config.timeout(),
            bypass_cache: true,
        };

        tracing::debug!("GET {} keyword='{}'", request.url, keyword);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(LookupError::Network)?;

        match response.status {
            200 => {}
            429 => return Err(LookupError::RateLimited),
            status if status >= 500 => return Err(LookupError::Server { status }),
            status => return Err(LookupError::Unknown { status }),
        }

        let parsed: SearchResponse =
            serde_json::from_slice(&response.body).map_err(LookupError::Decode)?;

        tracing::info!("Lookup '{}' returned {} entries", keyword, parsed.data.len());
        Ok(parsed.data)
    }
}
