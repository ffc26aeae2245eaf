use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::Key, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::setup_code::SetupCodeService,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application's Sqlite pool.
///
/// Cookies are signed with `SESSION_SECRET`, expire after a week of inactivity
/// and are marked `Secure` when the app is served over https.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, tower_sessions::service::SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "SESSION_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookies())
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )))
        .with_signed(key);

    Ok(session)
}

/// Generates a one-time setup code when no admin account exists.
///
/// The registration link carrying the code is printed to the log so the operator
/// can create the first admin.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    setup_code_service: &SetupCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = setup_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Register the first admin within 10 minutes at: {}/register?code={}",
        config.app_url,
        code
    );

    Ok(())
}
