//! The operations workflows need from the server.

use chanmap_model::{ChannelMappingOptions, ListingProvider, SetChannelMapping};

use crate::error::Result;

/// Live TV channel mapping operations.
///
/// All calls are blocking and independent; implementations hold no state
/// between them.
pub trait LiveTvBackend {
    /// List the configured EPG listing providers.
    fn listing_providers(&self) -> Result<Vec<ListingProvider>>;

    /// Fetch the current mapping snapshot for one provider.
    fn channel_mapping_options(&self, provider_id: &str) -> Result<ChannelMappingOptions>;

    /// Map a single tuner channel to a provider channel.
    fn set_channel_mapping(&self, request: &SetChannelMapping) -> Result<()>;
}

impl<T: LiveTvBackend + ?Sized> LiveTvBackend for &T {
    fn listing_providers(&self) -> Result<Vec<ListingProvider>> {
        (**self).listing_providers()
    }

    fn channel_mapping_options(&self, provider_id: &str) -> Result<ChannelMappingOptions> {
        (**self).channel_mapping_options(provider_id)
    }

    fn set_channel_mapping(&self, request: &SetChannelMapping) -> Result<()> {
        (**self).set_channel_mapping(request)
    }
}
