// File: services/registrify_backend/src/main.rs
use axum::{routing::get, Router};
use registrify_config::load_config;
use registrify_registration::routes as registration_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

mod app_state;
mod service_factory;

use app_state::AppState;

#[tokio::main]
async fn main() {
    registrify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let state = AppState::new(config.clone());

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Registrify API!" }))
        .merge(registration_routes(
            config.clone(),
            state.coordinator.clone(),
        ));

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use registrify_registration::doc::RegistrationApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Registrify API",
                version = "0.1.0",
                description = "Seminar registration service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags((name = "Registrify", description = "Core service endpoints")),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(RegistrationApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the registration page in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from ./static");
        app = app.fallback_service(ServeDir::new("static"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
