//! Proposed tuner-to-provider mappings produced by the import workflow.

/// A proposed mapping awaiting human review.
///
/// `provider_channel_id` holds whatever the import step decided to write into
/// the `ProviderChannelId` column. With the default settings that is the
/// matched provider channel *name*, not the lineup id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingProposal {
    pub tuner_channel_id: String,
    pub tuner_channel_name: String,
    pub provider_channel_id: String,
    pub provider_channel_name: String,
    /// Matcher score (0-100). Not written to the interchange file.
    pub score: u8,
}

impl MappingProposal {
    /// Columns in interchange order.
    #[must_use]
    pub fn columns(&self) -> [&str; 4] {
        [
            self.tuner_channel_id.as_str(),
            self.tuner_channel_name.as_str(),
            self.provider_channel_id.as_str(),
            self.provider_channel_name.as_str(),
        ]
    }
}
