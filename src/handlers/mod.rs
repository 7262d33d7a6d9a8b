//! # API Handlers
//!
//! HTTP endpoint handlers for the mock API, grouped by client area. Each
//! group exposes a `routes()` list that [`registry`] folds together.

use axum::{
    response::Json,
    routing::{MethodRouter, get},
};

use crate::models::{HealthStatus, ServiceInfo};
use crate::server::AppState;

pub mod common;
pub mod emr;
pub mod hospital;
pub mod patient;
pub mod types;
pub mod user;

/// A path and the method router serving it.
pub struct RouteEntry {
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

impl RouteEntry {
    pub fn new(path: &'static str, handler: MethodRouter<AppState>) -> Self {
        Self { path, handler }
    }
}

/// Every route served by the application.
pub fn registry() -> Vec<RouteEntry> {
    let mut routes = vec![
        RouteEntry::new("/", get(root)),
        RouteEntry::new("/healthz", get(healthz)),
    ];
    routes.extend(common::routes());
    routes.extend(user::routes());
    routes.extend(patient::routes());
    routes.extend(hospital::routes());
    routes.extend(emr::routes());
    routes
}

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    ),
    tag = "root"
)]
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests;
