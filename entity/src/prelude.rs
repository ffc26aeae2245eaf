pub use super::category::Entity as Category;
pub use super::product::Entity as Product;
pub use super::product_addon::Entity as ProductAddon;
pub use super::product_tech::Entity as ProductTech;
pub use super::user::Entity as User;
