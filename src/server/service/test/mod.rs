mod auth;
mod catalog;
mod category;
mod product;
