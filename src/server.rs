//! # Server Configuration
//!
//! Router assembly, middleware and the listener loop for the mock API.

use std::sync::Arc;

use axum::{Router, http::HeaderValue};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, ConfigError};
use crate::error::ServerError;
use crate::fixtures::{EntropySource, FixtureSource, SeededSource};
use crate::handlers;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub fixtures: Arc<dyn FixtureSource>,
}

impl AppState {
    /// State for the given configuration; a configured seed makes fixtures reproducible.
    pub fn new(config: AppConfig) -> Self {
        let fixtures: Arc<dyn FixtureSource> = match config.fixture_seed {
            Some(seed) => Arc::new(SeededSource::new(seed)),
            None => Arc::new(EntropySource),
        };
        Self {
            config: Arc::new(config),
            fixtures,
        }
    }

    /// Swap the fixture source, mainly for tests.
    pub fn with_fixtures(mut self, fixtures: impl FixtureSource + 'static) -> Self {
        self.fixtures = Arc::new(fixtures);
        self
    }
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);

    handlers::registry()
        .into_iter()
        .fold(Router::new(), |router, entry| {
            router.route(entry.path, entry.handler)
        })
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}

/// CORS layer from configuration. An empty origin list allows any origin.
pub fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(%origin, %error, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(origins)
}

/// Starts the server with the given configuration
pub async fn run_server(config: AppConfig) -> Result<(), ServerError> {
    config.validate()?;
    let addr = config
        .bind_addr()
        .map_err(|source| ConfigError::InvalidBindAddr {
            value: config.api_bind_addr.clone(),
            source,
        })?;

    match config.fixture_seed {
        Some(seed) => info!(seed, "serving seeded fixtures"),
        None => info!("serving random fixtures"),
    }
    let profile = config.profile.clone();
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, %profile, "server listening");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::common::query_current_patient,
        crate::handlers::common::send_captcha,
        crate::handlers::common::query_enum_kv_list,
        crate::handlers::user::modify,
        crate::handlers::user::wechat_login,
        crate::handlers::user::get_user_phone_number,
        crate::handlers::user::logout,
        crate::handlers::user::cancel,
        crate::handlers::user::verify_captcha,
        crate::handlers::patient::query_current_patient,
        crate::handlers::patient::detail,
        crate::handlers::patient::switch_patient,
        crate::handlers::patient::unbind_patient,
        crate::handlers::patient::query_patient_list,
        crate::handlers::patient::add_patient,
        crate::handlers::patient::verify_captcha,
        crate::handlers::patient::query_self_medications,
        crate::handlers::patient::query_order_list,
        crate::handlers::patient::query_order_detail,
        crate::handlers::patient::query_visit_plan_list,
        crate::handlers::patient::query_medical_records,
        crate::handlers::hospital::query_hospital_list,
        crate::handlers::hospital::query_detail,
        crate::handlers::hospital::query_doctor_teams,
        crate::handlers::hospital::query_equipment,
        crate::handlers::emr::query_base_info,
        crate::handlers::emr::query_lab_item_list,
        crate::handlers::emr::query_item_detail,
        crate::handlers::emr::query_exception_list,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::HealthStatus,
            crate::models::EnumKv,
            crate::handlers::types::PageRequest,
        )
    ),
    tags(
        (name = "root", description = "Service metadata"),
        (name = "common", description = "Shared lookups"),
        (name = "user", description = "Account endpoints"),
        (name = "patient", description = "Patients, orders and visit plans"),
        (name = "hospital", description = "Dialysis centers"),
        (name = "emr", description = "Medical records and lab results"),
    ),
    info(
        title = "Medmock API",
        description = "Mock backend for the dialysis patient client",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
