//! User domain models and parameters.
//!
//! Provides the account model used for authentication and role checks, plus the
//! parameter types for registration, login and role changes.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LoginDto, PaginatedUsersDto, RegisterDto, Role, UserDto},
    server::{error::AppError, util::validate},
};

/// Registered account with its role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Lower-cased email address, unique across users.
    pub email: String,
    /// Argon2 PHC string; never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_db(&entity.role),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a user row. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Registration form input.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub code: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            code: dto.code.filter(|code| !code.trim().is_empty()),
        }
    }

    /// Checks every field and returns the normalized form (trimmed name, lower-cased email).
    ///
    /// The password is checked as typed; surrounding whitespace is significant.
    pub fn validate(self) -> Result<Self, AppError> {
        let name = validate::text("name", &self.name, 1, 50)?;
        let email = validate::email("email", &self.email)?;

        let password_len = self.password.chars().count();
        if password_len < 8 {
            return Err(AppError::validation(
                "password",
                "Password must be at least 8 characters",
            ));
        }
        if password_len > 128 {
            return Err(AppError::validation(
                "password",
                "Password must be at most 128 characters",
            ));
        }

        Ok(Self {
            name,
            email,
            password: self.password,
            code: self.code,
        })
    }
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }

    pub fn validate(self) -> Result<Self, AppError> {
        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::validation("email", "Email is required"));
        }
        if self.password.is_empty() {
            return Err(AppError::validation("password", "Password is required"));
        }

        Ok(Self {
            email,
            password: self.password,
        })
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterParams {
        RegisterParams::from_dto(RegisterDto {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            code: None,
        })
    }

    fn invalid_field(result: Result<RegisterParams, AppError>) -> String {
        match result {
            Err(AppError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn register_normalizes_name_and_email() {
        let params = register(" Ada ", "Ada@Example.com", "correct horse")
            .validate()
            .unwrap();

        assert_eq!(params.name, "Ada");
        assert_eq!(params.email, "ada@example.com");
    }

    #[test]
    fn register_rejects_each_invalid_field() {
        assert_eq!(invalid_field(register("", "a@b.co", "password1").validate()), "name");
        assert_eq!(invalid_field(register("Ada", "nope", "password1").validate()), "email");
        assert_eq!(invalid_field(register("Ada", "a@b.co", "short").validate()), "password");
        assert_eq!(
            invalid_field(register("Ada", "a@b.co", &"p".repeat(129)).validate()),
            "password"
        );
    }

    #[test]
    fn blank_setup_code_is_ignored() {
        let params = RegisterParams::from_dto(RegisterDto {
            code: Some("  ".to_string()),
            ..Default::default()
        });
        assert!(params.code.is_none());
    }

    #[test]
    fn login_requires_both_fields() {
        let missing_password = LoginParams::from_dto(LoginDto {
            email: "ada@example.com".to_string(),
            password: String::new(),
        })
        .validate();
        assert!(matches!(
            missing_password,
            Err(AppError::Validation { ref field, .. }) if field == "password"
        ));

        let params = LoginParams::from_dto(LoginDto {
            email: " ADA@example.com".to_string(),
            password: "secret".to_string(),
        })
        .validate()
        .unwrap();
        assert_eq!(params.email, "ada@example.com");
    }
}
