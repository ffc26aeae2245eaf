mod category;
mod product;
mod product_addon;
mod user;
