use crate::server::{data::product_addon::ProductAddonRepository, model::product::AddonParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn params(title: &str) -> AddonParams {
    AddonParams {
        title: title.to_string(),
        description: "Extra".to_string(),
    }
}
