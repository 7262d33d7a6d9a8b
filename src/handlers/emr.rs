//! # Medical Record API Handlers
//!
//! Record summary and lab results. List bodies may carry a `patientId`,
//! which is stamped on every generated lab item.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
    routing::{get, post},
};
use tracing::debug;

use super::RouteEntry;
use super::types::{LabItemQuery, LenientJson, PageRequest, non_empty};
use crate::envelope::{Envelope, PageEnvelope, paginate};
use crate::models::{BaseInfo, LabItem, LabItemDetail};
use crate::server::AppState;

pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/emr/queryBaseInfo", get(query_base_info)),
        RouteEntry::new("/emr/lab/queryLabItemList", post(query_lab_item_list)),
        RouteEntry::new("/emr/lab/queryItemDetail", get(query_item_detail)),
        RouteEntry::new("/emr/lab/queryExceptionList", post(query_exception_list)),
    ]
}

/// Diagnoses, treatment plans and vascular access notes
#[utoipa::path(
    get,
    path = "/emr/queryBaseInfo",
    responses((status = 200, description = "Record summary", body = Envelope<BaseInfo>)),
    tag = "emr"
)]
pub async fn query_base_info(State(state): State<AppState>) -> Json<Envelope<BaseInfo>> {
    let mut faker = state.fixtures.faker();
    Json(Envelope::new(BaseInfo::fake(&mut faker)))
}

/// Lab reports of a patient
#[utoipa::path(
    post,
    path = "/emr/lab/queryLabItemList",
    request_body = PageRequest,
    responses((status = 200, description = "Page of lab items", body = PageEnvelope<LabItem>)),
    tag = "emr"
)]
pub async fn query_lab_item_list(
    State(state): State<AppState>,
    LenientJson(body): LenientJson,
) -> Json<PageEnvelope<LabItem>> {
    let request = PageRequest::from_body(&body);
    let patient_id = request.patient_id.as_deref();
    let mut faker = state.fixtures.faker();
    let items = faker.multiple(request.fixture_count(), |f| LabItem::fake(f, patient_id));
    debug!(page = request.current_page, count = items.len(), "generated lab item list");
    Json(paginate(items, request.current_page, faker.rng()))
}

/// Single lab result; `labItemId` is echoed when supplied
#[utoipa::path(
    get,
    path = "/emr/lab/queryItemDetail",
    params(LabItemQuery),
    responses((status = 200, description = "Lab item detail", body = Envelope<LabItemDetail>)),
    tag = "emr"
)]
pub async fn query_item_detail(
    State(state): State<AppState>,
    query: Result<Query<LabItemQuery>, QueryRejection>,
) -> Json<Envelope<LabItemDetail>> {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let mut faker = state.fixtures.faker();
    let detail = LabItemDetail::fake(&mut faker, non_empty(&query.lab_item_id), None);
    Json(Envelope::new(detail))
}

/// Lab results of a patient, each with its reference range and flag
#[utoipa::path(
    post,
    path = "/emr/lab/queryExceptionList",
    request_body = PageRequest,
    responses((status = 200, description = "Page of lab item details", body = PageEnvelope<LabItemDetail>)),
    tag = "emr"
)]
pub async fn query_exception_list(
    State(state): State<AppState>,
    LenientJson(body): LenientJson,
) -> Json<PageEnvelope<LabItemDetail>> {
    let request = PageRequest::from_body(&body);
    let patient_id = request.patient_id.as_deref();
    let mut faker = state.fixtures.faker();
    let items = faker.multiple(request.fixture_count(), |f| {
        LabItemDetail::fake(f, None, patient_id)
    });
    Json(paginate(items, request.current_page, faker.rng()))
}
