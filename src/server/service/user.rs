//! Admin user management.
//!
//! Role changes and deletions keep at least one admin in the system and never let an
//! admin remove their own access.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{PaginatedUsers, User},
        util::pagination,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users with pagination, ordered by name.
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (page, per_page) = pagination::bounded(page, per_page)?;

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = pagination::total_pages(total, per_page);

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Changes the role of `target_id` on behalf of `actor`.
    ///
    /// The admin count is checked in the same transaction as the write.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::BadRequest)` - Actor demoting themselves, or no admin would remain
    pub async fn update_role(&self, actor: &User, target_id: i32, role: Role) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let Some(target) = repo.find_by_id(target_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if target.role == role {
            return Ok(target);
        }

        if role != Role::Admin {
            if actor.id == target.id {
                return Err(AppError::BadRequest(
                    "You cannot remove your own admin role".to_string(),
                ));
            }
            if target.is_admin() && repo.count_admins().await? <= 1 {
                return Err(AppError::BadRequest(
                    "At least one admin is required".to_string(),
                ));
            }
        }

        let user = repo.set_role(target_id, role).await?;
        txn.commit().await?;

        Ok(user)
    }

    /// Deletes `target_id` on behalf of `actor`.
    ///
    /// The admin count is checked in the same transaction as the delete.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::BadRequest)` - Actor deleting themselves, or the last admin
    pub async fn delete(&self, actor: &User, target_id: i32) -> Result<(), AppError> {
        if actor.id == target_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let Some(target) = repo.find_by_id(target_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if target.is_admin() && repo.count_admins().await? <= 1 {
            return Err(AppError::BadRequest(
                "At least one admin is required".to_string(),
            ));
        }

        if !repo.delete(target_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }
}
