//! Data transfer objects shared between the web client and the server.
//!
//! Every type here is serialized as JSON over the HTTP API. With the `server` feature the
//! types also derive `utoipa::ToSchema` so they appear in the OpenAPI document.

pub mod api;
pub mod catalog;
pub mod category;
pub mod product;
pub mod route;
pub mod upload;
pub mod user;
