//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Running form checks before any mutation
//! - **Business Logic**: Role rules, setup codes, password hashing
//! - **Orchestration**: Coordinating repository calls and catalog revalidation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod catalog;
pub mod category;
pub mod product;
pub mod setup_code;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
