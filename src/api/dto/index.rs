//! DTOs for the status and stats endpoints.

use serde::Serialize;

/// Liveness response: always `{"status":"OK"}`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Per-kind object counts.
///
/// Field order matches the JSON the endpoint has always produced.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub amenities: u64,
    pub cities: u64,
    pub places: u64,
    pub reviews: u64,
    pub states: u64,
    pub users: u64,
}
