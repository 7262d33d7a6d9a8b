//! # Patient API Handlers
//!
//! Patient profile, bound-patient management, orders and visit plans.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
    routing::{get, post},
};
use tracing::debug;

use super::RouteEntry;
use super::types::{LenientJson, PageRequest, PatientIdQuery, non_empty};
use crate::envelope::{Envelope, PageEnvelope, paginate};
use crate::models::{Order, OrderDetail, PatientInfo, PatientSummary, SelfMedication, VisitPlan};
use crate::server::AppState;

pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/patient/queryCurrentPatient", post(query_current_patient)),
        RouteEntry::new("/patient/detail", get(detail)),
        RouteEntry::new(
            "/patient/switchPatient",
            get(switch_patient).post(switch_patient),
        ),
        RouteEntry::new(
            "/patient/unbindPatient",
            get(unbind_patient).post(unbind_patient),
        ),
        RouteEntry::new("/patient/queryPatientList", post(query_patient_list)),
        RouteEntry::new("/patient/addPatient", post(add_patient)),
        RouteEntry::new("/patient/verifyCaptcha", post(verify_captcha)),
        RouteEntry::new("/patient/querySelfMedications", get(query_self_medications)),
        RouteEntry::new("/patient/order/queryOrderList", post(query_order_list)),
        RouteEntry::new("/patient/order/queryOrderDetail", get(query_order_detail)),
        RouteEntry::new(
            "/patient/visitPlan/queryVisitPlanList",
            post(query_visit_plan_list),
        ),
        RouteEntry::new(
            "/patient/visitPlan/queryMedicalRecords",
            get(query_medical_records),
        ),
    ]
}

/// Profile of the patient currently selected by the account
#[utoipa::path(
    post,
    path = "/patient/queryCurrentPatient",
    responses((status = 200, description = "Current patient profile", body = Envelope<PatientInfo>)),
    tag = "patient"
)]
pub async fn query_current_patient(State(state): State<AppState>) -> Json<Envelope<PatientInfo>> {
    let mut faker = state.fixtures.faker();
    Json(Envelope::new(PatientInfo::fake(&mut faker)))
}

/// Patient profile; `patientId` is echoed when supplied
#[utoipa::path(
    get,
    path = "/patient/detail",
    params(PatientIdQuery),
    responses((status = 200, description = "Patient profile", body = Envelope<PatientInfo>)),
    tag = "patient"
)]
pub async fn detail(
    State(state): State<AppState>,
    query: Result<Query<PatientIdQuery>, QueryRejection>,
) -> Json<Envelope<PatientInfo>> {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let mut faker = state.fixtures.faker();
    let mut info = PatientInfo::fake(&mut faker);
    if let Some(patient_id) = non_empty(&query.patient_id) {
        info.patient_id = patient_id.to_string();
    }
    Json(Envelope::new(info))
}

/// Switch the current patient
#[utoipa::path(
    post,
    path = "/patient/switchPatient",
    responses((status = 200, description = "Switched", body = Envelope<bool>)),
    tag = "patient"
)]
pub async fn switch_patient() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("切换成功"))
}

/// Unbind a patient from the account
#[utoipa::path(
    post,
    path = "/patient/unbindPatient",
    responses((status = 200, description = "Unbound", body = Envelope<bool>)),
    tag = "patient"
)]
pub async fn unbind_patient() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("解绑成功"))
}

/// Patients bound to the account; the first one is the current patient
#[utoipa::path(
    post,
    path = "/patient/queryPatientList",
    request_body = PageRequest,
    responses((status = 200, description = "Page of patients", body = PageEnvelope<PatientSummary>)),
    tag = "patient"
)]
pub async fn query_patient_list(
    State(state): State<AppState>,
    LenientJson(body): LenientJson,
) -> Json<PageEnvelope<PatientSummary>> {
    let request = PageRequest::from_body(&body);
    let mut faker = state.fixtures.faker();
    let patients = PatientSummary::fake_list(&mut faker, request.fixture_count());
    debug!(page = request.current_page, count = patients.len(), "generated patient list");
    Json(paginate(patients, request.current_page, faker.rng()))
}

#[utoipa::path(
    post,
    path = "/patient/addPatient",
    responses((status = 200, description = "Patient added", body = Envelope<bool>)),
    tag = "patient"
)]
pub async fn add_patient() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("添加成功"))
}

#[utoipa::path(
    post,
    path = "/patient/verifyCaptcha",
    responses((status = 200, description = "Captcha accepted", body = Envelope<bool>)),
    tag = "patient"
)]
pub async fn verify_captcha() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("验证码验证成功"))
}

/// Medications the patient brings along, with usage counters
#[utoipa::path(
    get,
    path = "/patient/querySelfMedications",
    responses((status = 200, description = "All self medications in one page", body = PageEnvelope<SelfMedication>)),
    tag = "patient"
)]
pub async fn query_self_medications(
    State(state): State<AppState>,
) -> Json<PageEnvelope<SelfMedication>> {
    let mut faker = state.fixtures.faker();
    let count = faker.count(1, 4);
    let items = faker.multiple(count, SelfMedication::fake);
    Json(PageEnvelope::single_page(items))
}

/// Payment orders
#[utoipa::path(
    post,
    path = "/patient/order/queryOrderList",
    request_body = PageRequest,
    responses((status = 200, description = "Page of orders", body = PageEnvelope<Order>)),
    tag = "patient"
)]
pub async fn query_order_list(
    State(state): State<AppState>,
    LenientJson(body): LenientJson,
) -> Json<PageEnvelope<Order>> {
    let request = PageRequest::from_body(&body);
    let mut faker = state.fixtures.faker();
    let orders = faker.multiple(request.fixture_count(), Order::fake);
    debug!(page = request.current_page, count = orders.len(), "generated order list");
    Json(paginate(orders, request.current_page, faker.rng()))
}

/// Order with its billed lines
#[utoipa::path(
    get,
    path = "/patient/order/queryOrderDetail",
    responses((status = 200, description = "Order detail", body = Envelope<OrderDetail>)),
    tag = "patient"
)]
pub async fn query_order_detail(State(state): State<AppState>) -> Json<Envelope<OrderDetail>> {
    let mut faker = state.fixtures.faker();
    Json(Envelope::new(OrderDetail::fake(&mut faker)))
}

/// Upcoming dialysis sessions
#[utoipa::path(
    post,
    path = "/patient/visitPlan/queryVisitPlanList",
    request_body = PageRequest,
    responses((status = 200, description = "Page of visit plans", body = PageEnvelope<VisitPlan>)),
    tag = "patient"
)]
pub async fn query_visit_plan_list(
    State(state): State<AppState>,
    LenientJson(body): LenientJson,
) -> Json<PageEnvelope<VisitPlan>> {
    let request = PageRequest::from_body(&body);
    let mut faker = state.fixtures.faker();
    let plans = faker.multiple(request.fixture_count(), VisitPlan::fake);
    Json(paginate(plans, request.current_page, faker.rng()))
}

/// Completed dialysis sessions from the last six months
#[utoipa::path(
    get,
    path = "/patient/visitPlan/queryMedicalRecords",
    responses((status = 200, description = "All records in one page", body = PageEnvelope<VisitPlan>)),
    tag = "patient"
)]
pub async fn query_medical_records(State(state): State<AppState>) -> Json<PageEnvelope<VisitPlan>> {
    let mut faker = state.fixtures.faker();
    let count = faker.count(1, 5);
    let records = faker.multiple(count, VisitPlan::fake_record);
    Json(PageEnvelope::single_page(records))
}
