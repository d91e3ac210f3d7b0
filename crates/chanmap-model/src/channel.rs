//! Channel lineups and the mapping write request.

use serde::{Deserialize, Serialize};

use crate::provider::ChannelMapping;
use crate::serde_util::null_as_default;

/// One entry in an EPG provider's channel lineup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderChannel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A channel as seen by the local tuner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TunerChannel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub provider_channel_id: Option<String>,
    #[serde(default)]
    pub provider_channel_name: Option<String>,
}

impl TunerChannel {
    /// Whether the server already has a provider channel assigned to this tuner channel.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.provider_channel_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}

/// Snapshot of the mapping state for one listing provider.
///
/// The three sequences come from the same server response but nothing ties
/// them together: a tuner channel may reference a provider channel id that is
/// not in `provider_channels`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelMappingOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mappings: Vec<ChannelMapping>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider_channels: Vec<ProviderChannel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tuner_channels: Vec<TunerChannel>,
}

impl ChannelMappingOptions {
    /// Provider channel names in lineup order.
    #[must_use]
    pub fn provider_channel_names(&self) -> Vec<&str> {
        self.provider_channels
            .iter()
            .map(|channel| channel.name.as_str())
            .collect()
    }

    /// Number of tuner channels that already carry a provider channel id.
    ///
    /// Differs from `mappings.len()`: `mappings` lists the provider's
    /// configured name overrides, not per-tuner assignments.
    #[must_use]
    pub fn mapped_tuner_count(&self) -> usize {
        self.tuner_channels.iter().filter(|c| c.is_mapped()).count()
    }
}

/// Body of `POST /LiveTv/ChannelMappings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetChannelMapping {
    pub provider_id: String,
    pub provider_channel_id: String,
    pub tuner_channel_id: String,
}

impl SetChannelMapping {
    pub fn new(
        provider_id: impl Into<String>,
        tuner_channel_id: impl Into<String>,
        provider_channel_id: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            provider_channel_id: provider_channel_id.into(),
            tuner_channel_id: tuner_channel_id.into(),
        }
    }
}
