//! Client for the media server's Live TV channel mapping endpoints.
//!
//! Workflows talk to the server through the [`LiveTvBackend`] trait so they
//! can be driven by a test double; [`JellyfinClient`] is the HTTP
//! implementation.
//!
//! ```no_run
//! use chanmap_client::{ClientConfig, JellyfinClient, LiveTvBackend};
//!
//! fn list() -> chanmap_client::Result<()> {
//!     let config = ClientConfig::new("http://localhost:8096", "0123456789abcdef");
//!     let client = JellyfinClient::new(&config)?;
//!     for provider in client.listing_providers()? {
//!         println!("{} {}", provider.id, provider.label());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod client;
pub mod config;
pub mod error;

pub use backend::LiveTvBackend;
pub use client::JellyfinClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
