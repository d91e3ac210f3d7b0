//! The provider-channel listing written alongside every mapping proposal.
//!
//! Operators use it to look up real provider channel ids while reviewing a
//! mapping file.

use std::path::Path;

use chanmap_model::ProviderChannel;
use tracing::debug;

use crate::dialect::write_records;
use crate::error::InterchangeError;

/// File name of the provider-channel listing.
pub const PROVIDER_CHANNEL_LIST_FILE: &str = "provider_channel_list.csv";

pub const PROVIDER_LIST_HEADER: [&str; 2] = ["ProviderChannelId", "ProviderChannelName"];

/// Write the full provider lineup to `path`, truncating any previous listing.
pub fn write_provider_channel_list(
    path: &Path,
    channels: &[ProviderChannel],
) -> Result<usize, InterchangeError> {
    let written = write_records(
        path,
        &PROVIDER_LIST_HEADER,
        channels
            .iter()
            .map(|channel| [channel.id.as_str(), channel.name.as_str()]),
    )?;
    debug!(path = %path.display(), rows = written, "wrote provider channel list");
    Ok(written)
}
