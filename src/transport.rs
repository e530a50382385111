use std::future::Future;

use reqwest::Url;

use crate::api::{RawReply, SEARCH_PATH, SearchRequest};
use crate::error::SearchError;

/// Sends one search request to the backend and hands back whatever came back.
pub trait SearchTransport: Send + Sync {
    fn post_search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<RawReply, SearchError>> + Send;
}

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, SearchError> {
        let endpoint = format!("{}{}", base_url.trim().trim_end_matches('/'), SEARCH_PATH);
        let endpoint = Url::parse(&endpoint)
            .map_err(|_| SearchError::InvalidBaseUrl(base_url.to_string()))?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(SearchError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(HttpTransport { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchTransport for HttpTransport {
    async fn post_search(&self, request: &SearchRequest) -> Result<RawReply, SearchError> {
        // .json() sets Content-Type: application/json
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();
        tracing::debug!(status, bytes = body.len(), "search response received");
        Ok(RawReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_search_path() {
        let transport = HttpTransport::new("http://localhost:8000").unwrap();
        assert_eq!(transport.endpoint().as_str(), "http://localhost:8000/search");
    }

    #[test]
    fn test_endpoint_trims_trailing_slashes() {
        let transport = HttpTransport::new("https://osint.example.com/api//").unwrap();
        assert_eq!(
            transport.endpoint().as_str(),
            "https://osint.example.com/api/search"
        );
    }

    #[test]
    fn test_rejects_non_http_base_urls() {
        for base in ["", "localhost:8000", "ftp://example.com", "not a url"] {
            assert!(
                matches!(
                    HttpTransport::new(base),
                    Err(SearchError::InvalidBaseUrl(_))
                ),
                "base: {base}"
            );
        }
    }
}
