//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let category = factory::category::create_category(&db).await?;
//! let (category, product) = factory::helpers::create_product_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod product;
pub mod product_addon;
pub mod product_tech;
pub mod user;

pub use category::create_category;
pub use product::create_product;
pub use product_addon::create_addon;
pub use product_tech::create_tech;
pub use user::{create_admin, create_user};
