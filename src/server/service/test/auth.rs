use axum::http::StatusCode;
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::{LoginDto, RegisterDto, Role},
    server::{
        error::{auth::AuthError, AppError},
        model::user::{LoginParams, RegisterParams},
        service::{auth::AuthService, setup_code::SetupCodeService},
    },
};

fn register_params(email: &str, code: Option<String>) -> RegisterParams {
    RegisterParams::from_dto(RegisterDto {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        password: "analytical-engine".to_string(),
        code,
    })
}

fn login_params(email: &str, password: &str) -> LoginParams {
    LoginParams::from_dto(LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Tests that registration creates a `USER` with a hashed password and lower-cased email.
///
/// Expected: Ok with role USER and an argon2 hash stored
#[tokio::test]
async fn registers_regular_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .register(register_params("Ada@Example.com", None), &SetupCodeService::new())
        .await
        .unwrap();

    assert_eq!(user.role, Role::User);
    assert_eq!(user.email, "ada@example.com");
    assert!(user.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests that a valid setup code grants `ADMIN` and is consumed.
///
/// Expected: first registration is ADMIN, reuse of the code is rejected on field `code`
#[tokio::test]
async fn setup_code_grants_admin_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    let code = codes.generate().await;
    let service = AuthService::new(db);

    let admin = service
        .register(register_params("admin@example.com", Some(code.clone())), &codes)
        .await
        .unwrap();
    assert_eq!(admin.role, Role::Admin);

    let result = service
        .register(register_params("second@example.com", Some(code)), &codes)
        .await;
    assert!(matches!(
        result,
        Err(AppError::Validation { ref field, .. }) if field == "code"
    ));

    Ok(())
}

/// Tests that registering a taken email is a conflict, regardless of case.
///
/// Expected: Err with status 409
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .build()
        .await?;

    let result = AuthService::new(db)
        .register(register_params("ADA@example.com", None), &SetupCodeService::new())
        .await;

    assert_eq!(result.unwrap_err().status_code(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests logging in with the registered password, using any email casing.
///
/// Expected: Ok with the registered user
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service
        .register(register_params("ada@example.com", None), &SetupCodeService::new())
        .await
        .unwrap();

    let user = service
        .login(login_params("ADA@example.com", "analytical-engine"))
        .await
        .unwrap();

    assert_eq!(user.id, registered.id);

    Ok(())
}

/// Tests that wrong passwords and unknown emails fail identically.
///
/// Expected: Err(InvalidCredentials) with status 401 for both
#[tokio::test]
async fn rejects_bad_credentials_without_enumeration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(register_params("ada@example.com", None), &SetupCodeService::new())
        .await
        .unwrap();

    for params in [
        login_params("ada@example.com", "wrong-password"),
        login_params("nobody@example.com", "analytical-engine"),
    ] {
        let err = service.login(params).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::AuthErr(AuthError::InvalidCredentials)
        ));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    Ok(())
}

/// Tests that a setup code survives a registration whose insert fails.
///
/// Expected: first attempt fails with 500, the same code then registers an ADMIN
#[tokio::test]
async fn failed_insert_keeps_setup_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        r#"CREATE TRIGGER reject_user_insert BEFORE INSERT ON "user"
           BEGIN SELECT RAISE(ABORT, 'insert rejected'); END;"#,
    )
    .await?;

    let codes = SetupCodeService::new();
    let code = codes.generate().await;
    let service = AuthService::new(db);

    let err = service
        .register(register_params("admin@example.com", Some(code.clone())), &codes)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(codes.has_valid_code().await);

    db.execute_unprepared("DROP TRIGGER reject_user_insert").await?;

    let admin = service
        .register(register_params("admin@example.com", Some(code)), &codes)
        .await
        .unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert!(!codes.has_valid_code().await);

    Ok(())
}

/// Tests that a duplicate email is refused before the setup code is claimed.
///
/// Expected: Err 409 and the code still valid
#[tokio::test]
async fn duplicate_email_keeps_setup_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let err = AuthService::new(db)
        .register(register_params("taken@example.com", Some(code)), &codes)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::CONFLICT);
    assert!(codes.has_valid_code().await);

    Ok(())
}
