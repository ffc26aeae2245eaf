//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation, business rules and catalog revalidation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers, authentication guard and page redirects
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, catalog cache, setup code)
//! - **Startup** (`startup`) - Initialization of database, sessions and the first-admin setup code
//! - **Router** (`router`) - Axum routes and API documentation
//!
//! # Request Flow
//!
//! 1. **Session layer** loads the signed session cookie
//! 2. **Route guard** redirects page requests according to the session's role
//! 3. **Controller** checks permissions, converts DTOs to params, calls service
//! 4. **Service** validates input, executes business logic, revalidates caches
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
