//! Data Transfer Objects
//!
//! Request and response types for the JSON endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameters for `GET /api/v1/records`
#[derive(Debug, Default, Deserialize)]
pub struct RecordsParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<usize>,
    /// Rows per page, defaults to the table page size
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// One page of dataset records
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub columns: Vec<String>,
    pub records: Vec<Map<String, Value>>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub rows: usize,
    pub callbacks: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
