#![deny(unsafe_code)]

pub mod channel;
pub mod proposal;
pub mod provider;

mod serde_util;

pub use channel::{ChannelMappingOptions, ProviderChannel, SetChannelMapping, TunerChannel};
pub use proposal::MappingProposal;
pub use provider::{ChannelMapping, ListingProvider, LiveTvConfiguration};
