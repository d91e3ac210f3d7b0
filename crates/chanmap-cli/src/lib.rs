//! Library components of the `channel-mapper` binary.

pub mod config;
pub mod logging;
pub mod terminal;
