//! Interchange files exchanged with the operator between import and export.
//!
//! Both files share one dialect: `;` as delimiter, `\` as quote character,
//! minimal quoting, a single header row.

#![deny(unsafe_code)]

pub mod dialect;
pub mod error;
pub mod mapping;
pub mod provider_list;

pub use crate::error::InterchangeError;
pub use crate::mapping::{MAPPING_HEADER, MappingReader, MappingRow, write_mapping_file};
pub use crate::provider_list::{
    PROVIDER_CHANNEL_LIST_FILE, PROVIDER_LIST_HEADER, write_provider_channel_list,
};
