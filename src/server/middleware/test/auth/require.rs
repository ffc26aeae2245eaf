use super::*;

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(42).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));

    Ok(())
}

/// Tests that any logged-in user passes when no permission is required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests that the admin permission rejects a USER.
///
/// Expected: Err(AuthError::AccessDenied) with status 403
#[tokio::test]
async fn denies_user_admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let err = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied(id, _)) if id == user.id
    ));
    assert_eq!(err.status_code(), axum::http::StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests that a role change in the database applies to the next check.
///
/// Expected: Ok for the admin, then AccessDenied after demotion
#[tokio::test]
async fn reads_role_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let guard = AuthGuard::new(db, session);
    assert!(guard.require(&[Permission::Admin]).await.is_ok());

    crate::server::data::user::UserRepository::new(db)
        .set_role(admin.id, crate::model::user::Role::User)
        .await?;

    assert!(matches!(
        guard.require(&[Permission::Admin]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
