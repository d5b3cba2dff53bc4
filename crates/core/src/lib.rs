//! Domain logic for the random release finder.
//!
//! Everything here is independent of HTTP and of any concrete upstream
//! client: filter handling, decade resolution, page sampling and the
//! bounded attempt loop run against the [`catalog::ReleaseCatalog`] trait.

pub mod catalog;
pub mod filters;
pub mod release;
pub mod sampler;
