pub mod retry;

#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod catalog;
#[cfg(feature = "web")]
pub mod category;
#[cfg(feature = "web")]
pub mod helper;
#[cfg(feature = "web")]
pub mod product;
#[cfg(feature = "web")]
pub mod upload;
#[cfg(feature = "web")]
pub mod user;
