//! # Hospital API Handlers

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
    routing::{get, post},
};
use tracing::debug;

use super::RouteEntry;
use super::types::{HospitalStoreQuery, LenientJson, PageRequest, non_empty};
use crate::envelope::{Envelope, PageEnvelope, paginate};
use crate::models::{DoctorTeam, Equipment, HospitalStore};
use crate::server::AppState;

pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/hospital/queryHospitalList", post(query_hospital_list)),
        RouteEntry::new("/hospital/queryDetail", get(query_detail)),
        RouteEntry::new("/hospital/queryDoctorTeams", get(query_doctor_teams)),
        RouteEntry::new("/hospital/queryEquipment", get(query_equipment)),
    ]
}

fn store_query(query: Result<Query<HospitalStoreQuery>, QueryRejection>) -> HospitalStoreQuery {
    query.map(|Query(query)| query).unwrap_or_default()
}

/// Nearby dialysis centers
#[utoipa::path(
    post,
    path = "/hospital/queryHospitalList",
    request_body = PageRequest,
    responses((status = 200, description = "Page of hospital stores", body = PageEnvelope<HospitalStore>)),
    tag = "hospital"
)]
pub async fn query_hospital_list(
    State(state): State<AppState>,
    LenientJson(body): LenientJson,
) -> Json<PageEnvelope<HospitalStore>> {
    let request = PageRequest::from_body(&body);
    let mut faker = state.fixtures.faker();
    let stores = faker.multiple(request.fixture_count(), HospitalStore::fake);
    debug!(page = request.current_page, count = stores.len(), "generated hospital list");
    Json(paginate(stores, request.current_page, faker.rng()))
}

/// Hospital store detail; `hospitalStoreId` is echoed when supplied
#[utoipa::path(
    get,
    path = "/hospital/queryDetail",
    params(HospitalStoreQuery),
    responses((status = 200, description = "Hospital store", body = Envelope<HospitalStore>)),
    tag = "hospital"
)]
pub async fn query_detail(
    State(state): State<AppState>,
    query: Result<Query<HospitalStoreQuery>, QueryRejection>,
) -> Json<Envelope<HospitalStore>> {
    let query = store_query(query);
    let mut faker = state.fixtures.faker();
    let store = HospitalStore::fake_with_id(&mut faker, non_empty(&query.hospital_store_id));
    Json(Envelope::new(store))
}

/// Doctors of a hospital store
#[utoipa::path(
    get,
    path = "/hospital/queryDoctorTeams",
    params(HospitalStoreQuery),
    responses((status = 200, description = "All doctors in one page", body = PageEnvelope<DoctorTeam>)),
    tag = "hospital"
)]
pub async fn query_doctor_teams(
    State(state): State<AppState>,
    query: Result<Query<HospitalStoreQuery>, QueryRejection>,
) -> Json<PageEnvelope<DoctorTeam>> {
    let query = store_query(query);
    let store_id = non_empty(&query.hospital_store_id);
    let mut faker = state.fixtures.faker();
    let count = faker.count(1, 5);
    let teams = faker.multiple(count, |f| DoctorTeam::fake(f, store_id));
    Json(PageEnvelope::single_page(teams))
}

/// Equipment photos of a hospital store
#[utoipa::path(
    get,
    path = "/hospital/queryEquipment",
    responses((status = 200, description = "All equipment in one page", body = PageEnvelope<Equipment>)),
    tag = "hospital"
)]
pub async fn query_equipment(State(state): State<AppState>) -> Json<PageEnvelope<Equipment>> {
    let mut faker = state.fixtures.faker();
    let count = faker.count(1, 6);
    let equipment = faker.multiple(count, Equipment::fake);
    Json(PageEnvelope::single_page(equipment))
}
