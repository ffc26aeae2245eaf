//! HTTP handlers: access control, DTO conversion and status codes.

use serde::Deserialize;
use utoipa::IntoParams;

pub mod auth;
pub mod catalog;
pub mod category;
pub mod product;
pub mod upload;
pub mod user;

/// Query parameters shared by every paginated admin listing.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, clamped to 1..=100)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
