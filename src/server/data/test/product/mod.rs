use crate::server::{
    data::product::ProductRepository,
    model::product::{AddonParams, ProductParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_paginated;
mod reorder;
mod update;

fn params(category_id: i32) -> ProductParams {
    ProductParams {
        name: "Folio".to_string(),
        description: "Portfolio site".to_string(),
        image: "/uploads/folio.png".to_string(),
        category_id,
        github_url: Some("https://github.com/example/folio".to_string()),
        live_url: None,
        order: 0,
        techs: vec!["Rust".to_string(), "Dioxus".to_string()],
        addon: None,
    }
}

fn addon(title: &str) -> AddonParams {
    AddonParams {
        title: title.to_string(),
        description: "Included extra".to_string(),
    }
}
