//! Credentials authentication: registration and login.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, map_unique_violation, AppError},
        model::user::{CreateUserParams, LoginParams, RegisterParams, User},
        service::setup_code::SetupCodeService,
        util::password::{hash_password, verify_password},
    },
};

const EMAIL_TAKEN: &str = "An account with this email already exists";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The account gets the `USER` role unless `params.code` is the active setup code,
    /// which grants `ADMIN` and is consumed once the account exists.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Invalid field or setup code
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(
        &self,
        params: RegisterParams,
        setup_codes: &SetupCodeService,
    ) -> Result<User, AppError> {
        let params = params.validate()?;
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let claimed = match params.code.as_deref() {
            Some(code) => match setup_codes.claim(code).await {
                Some(claimed) => Some(claimed),
                None => {
                    return Err(AppError::validation(
                        "code",
                        "Setup code is invalid or has expired",
                    ))
                }
            },
            None => None,
        };
        let role = if claimed.is_some() {
            Role::Admin
        } else {
            Role::User
        };

        let created = create_account(&repo, params.name, params.email, &params.password, role).await;

        // Give the code back when the account was not created
        let user = match (created, claimed) {
            (Ok(user), _) => user,
            (Err(e), Some(claimed)) => {
                setup_codes.restore(claimed).await;
                return Err(e);
            }
            (Err(e), None) => return Err(e),
        };

        if user.is_admin() {
            tracing::info!("Admin account created for {}", user.email);
        }

        Ok(user)
    }

    /// Verifies email and password.
    ///
    /// Unknown emails and wrong passwords both return `AuthError::InvalidCredentials`.
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let params = params.validate()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&params.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

async fn create_account(
    repo: &UserRepository<'_>,
    name: String,
    email: String,
    password: &str,
    role: Role,
) -> Result<User, AppError> {
    let password_hash = hash_password(password)?;

    repo.create(CreateUserParams {
        name,
        email,
        password_hash,
        role,
    })
    .await
    .map_err(|e| map_unique_violation(e, EMAIL_TAKEN))
}
