//! Client for the upstream movie database (TMDB v3).

pub mod client;
pub mod error;
pub mod types;

pub use client::TmdbClient;
pub use error::TmdbError;
