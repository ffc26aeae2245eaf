mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::middleware;
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            middleware::route_guard::route_guard,
            service::{catalog::CatalogCache, setup_code::SetupCodeService},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;

        let setup_code_service = SetupCodeService::new();

        tracing::info!("Starting server");

        // Print a first-admin registration link if no admin exists
        startup::check_for_admin(&db, &config, &setup_code_service).await?;

        let state = AppState::new(db, CatalogCache::new(), setup_code_service, &config);

        let server_routes = server::router::router(&state).with_state(state.clone());

        let router = dioxus::server::router(App)
            .merge(server_routes)
            .layer(middleware::from_fn_with_state(state, route_guard))
            .layer(session);

        Ok(router)
    })
}
