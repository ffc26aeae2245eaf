//! Domain models and operation-specific parameter types.
//!
//! Domain models are built from SeaORM entities at the repository boundary (`from_entity`)
//! and converted to shared DTOs at the controller boundary (`into_dto`). Parameter types
//! carry validated form input from controllers into services (`from_dto`, `validate`).

pub mod catalog;
pub mod category;
pub mod product;
pub mod user;
