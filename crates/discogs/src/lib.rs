//! Discogs catalog client.
//!
//! Implements [`randomizer_core::catalog::ReleaseCatalog`] on top of the
//! Discogs database search and release endpoints.

pub mod client;
pub mod error;

pub use client::{DiscogsClient, DiscogsConfig};
pub use error::DiscogsError;
