//! SeaORM entity definitions for the portfolio database.

pub mod prelude;

pub mod category;
pub mod product;
pub mod product_addon;
pub mod product_tech;
pub mod user;
