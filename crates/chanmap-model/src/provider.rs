//! Listing provider configuration as reported by `/System/Configuration/livetv`.

use serde::Deserialize;

use crate::serde_util::null_as_default;

/// A generic `(name, value)` attribute attached to server-side mapping data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelMapping {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// One configured EPG data source on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListingProvider {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Filesystem or source path of the guide data.
    #[serde(default)]
    pub path: Option<String>,
    /// Provider type tag (e.g. `xmltv`, `schedulesdirect`).
    #[serde(rename = "Type", default)]
    pub provider_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel_mappings: Vec<ChannelMapping>,
}

impl ListingProvider {
    /// Text shown to the operator when choosing a provider.
    ///
    /// Uses the source path, falling back to the id for providers without one.
    #[must_use]
    pub fn label(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.trim().is_empty() => path,
            _ => &self.id,
        }
    }
}

/// Decoded body of the live TV configuration endpoint.
///
/// Only the listing providers are of interest; every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LiveTvConfiguration {
    #[serde(default, deserialize_with = "null_as_default")]
    pub listing_providers: Vec<ListingProvider>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: &str, path: Option<&str>) -> ListingProvider {
        ListingProvider {
            id: id.to_string(),
            path: path.map(str::to_string),
            ..ListingProvider::default()
        }
    }

    #[test]
    fn label_prefers_path() {
        assert_eq!(provider("abc", Some("/guide/epg.xml")).label(), "/guide/epg.xml");
    }

    #[test]
    fn label_falls_back_to_id() {
        assert_eq!(provider("abc", None).label(), "abc");
        assert_eq!(provider("abc", Some("  ")).label(), "abc");
    }
}
