//! Typed HTTP client for the Sea Life records API.

mod client;
mod errors;
pub mod table;

pub use client::*;
pub use errors::ClientError;
