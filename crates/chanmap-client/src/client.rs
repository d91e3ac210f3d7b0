//! HTTP implementation of [`LiveTvBackend`].

use std::time::Duration;

use chanmap_model::{
    ChannelMappingOptions, ListingProvider, LiveTvConfiguration, SetChannelMapping,
};
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::backend::LiveTvBackend;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("channel-mapper/", env!("CARGO_PKG_VERSION"));

const LIVETV_CONFIGURATION_PATH: &str = "/System/Configuration/livetv";
const MAPPING_OPTIONS_PATH: &str = "/LiveTv/ChannelMappingOptions";
const CHANNEL_MAPPINGS_PATH: &str = "/LiveTv/ChannelMappings";

/// Blocking client for a Jellyfin-compatible server.
#[derive(Debug, Clone)]
pub struct JellyfinClient {
    client: Client,
    base_url: String,
}

impl JellyfinClient {
    /// Creates a client that authenticates every request with the configured token.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut authorization =
            HeaderValue::from_str(&config.authorization()).map_err(|_| ClientError::InvalidToken)?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn mapping_options_url(&self, provider_id: &str) -> Result<Url> {
        let url = self.url(MAPPING_OPTIONS_PATH);
        Url::parse_with_params(&url, &[("providerId", provider_id)]).map_err(|e| {
            ClientError::Transport {
                url,
                message: e.to_string(),
            }
        })
    }

    /// Sends a request and returns the body of a successful response.
    fn send(&self, url: &str, request: RequestBuilder) -> Result<String> {
        let response = request.send().map_err(|e| ClientError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let status = response.status();
        let body = response.text().map_err(|e| ClientError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }
        Ok(body)
    }
}

impl LiveTvBackend for JellyfinClient {
    fn listing_providers(&self) -> Result<Vec<ListingProvider>> {
        let url = self.url(LIVETV_CONFIGURATION_PATH);
        debug!("Fetching listing providers from {}", url);

        let body = self.send(&url, self.client.get(&url))?;
        let configuration: LiveTvConfiguration = decode_body(&url, &body)?;
        debug!(count = configuration.listing_providers.len(), "listing providers received");
        Ok(configuration.listing_providers)
    }

    fn channel_mapping_options(&self, provider_id: &str) -> Result<ChannelMappingOptions> {
        let url = self.mapping_options_url(provider_id)?;
        debug!("Fetching channel mapping options from {}", url);

        let body = self.send(url.as_str(), self.client.get(url.clone()))?;
        decode_body(url.as_str(), &body)
    }

    fn set_channel_mapping(&self, request: &SetChannelMapping) -> Result<()> {
        let url = self.url(CHANNEL_MAPPINGS_PATH);
        debug!(
            tuner_channel_id = %request.tuner_channel_id,
            provider_channel_id = %request.provider_channel_id,
            "setting channel mapping"
        );

        self.send(&url, self.client.post(&url).json(request))?;
        Ok(())
    }
}

/// Decodes a JSON response body.
///
/// An empty body decodes to the type's default, which the server sends when
/// nothing has been configured yet.
pub(crate) fn decode_body<T>(url: &str, body: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> JellyfinClient {
        JellyfinClient::new(&ClientConfig::new(endpoint, "token")).unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(JellyfinClient::new(&ClientConfig::new("http://localhost:8096", "abc")).is_ok());
    }

    #[test]
    fn rejects_token_with_newline() {
        let result = JellyfinClient::new(&ClientConfig::new("http://localhost:8096", "a\nb"));
        assert!(matches!(result, Err(ClientError::InvalidToken)));
    }

    #[test]
    fn urls_join_without_double_slash() {
        let client = client("http://localhost:8096/");
        assert_eq!(
            client.url(LIVETV_CONFIGURATION_PATH),
            "http://localhost:8096/System/Configuration/livetv"
        );
    }

    #[test]
    fn provider_id_is_query_encoded() {
        let client = client("http://localhost:8096");
        let url = client.mapping_options_url("a b&c").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8096/LiveTv/ChannelMappingOptions?providerId=a+b%26c"
        );
    }

    #[test]
    fn empty_body_decodes_to_default() {
        let config: LiveTvConfiguration = decode_body("u", "  ").unwrap();
        assert!(config.listing_providers.is_empty());
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let result: Result<LiveTvConfiguration> = decode_body("u", "<html>");
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }
}
