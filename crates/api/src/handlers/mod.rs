//! Request handlers.
//!
//! Handlers delegate to `randomizer_core` and map failures via
//! [`AppError`](crate::error::AppError).

pub mod releases;
