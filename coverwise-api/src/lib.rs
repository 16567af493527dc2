//! coverwise-api: HTTP client for the external analyze/recommend/compare
//! services, plus client-side CSV validation before upload.

pub mod client;
pub mod upload;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use upload::{validate_csv, validate_csv_bytes, CsvPreview};
