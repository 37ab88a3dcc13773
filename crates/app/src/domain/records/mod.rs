//! Marine Records

pub mod data;
pub mod errors;
pub mod models;
mod repository;
pub mod service;
pub mod view;

pub use data::NewRecord;
pub use errors::RecordsServiceError;
pub use models::{Category, MarineRecord, RecordId, time_of_day};
pub use service::*;
