use super::*;

/// Tests the optional lookup used by the route guard and `/api/auth/user`.
///
/// Expected: None without a session, Some after login, None after clearing
#[tokio::test]
async fn follows_session_state() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    assert!(guard.current_user().await?.is_none());

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let current = guard.current_user().await?.unwrap();
    assert_eq!(current.email, user.email);

    auth_session.clear().await?;
    assert!(guard.current_user().await?.is_none());

    Ok(())
}
