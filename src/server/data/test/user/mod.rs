use crate::{
    model::user::Role,
    server::{data::user::UserRepository, model::user::CreateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_admins;
mod create;
mod delete;
mod find_by_email;
mod get_all_paginated;
mod set_role;

fn params(email: &str, role: Role) -> CreateUserParams {
    CreateUserParams {
        name: "Ada".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role,
    }
}
