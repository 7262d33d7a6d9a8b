//! # Common API Handlers
//!
//! Shared lookups used across the client: current patient, captcha delivery
//! and enum dictionaries.

use std::collections::BTreeMap;

use axum::{extract::State, response::Json, routing::get, routing::post};
use serde_json::Value;

use super::RouteEntry;
use super::types::{EnumKeysRequest, LenientJson};
use crate::envelope::Envelope;
use crate::models::{EnumKv, PatientInfo};
use crate::server::AppState;

pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/common/queryCurrentPatient", get(query_current_patient)),
        RouteEntry::new("/common/sendCaptcha", get(send_captcha)),
        RouteEntry::new("/common/queryEnumKvList", post(query_enum_kv_list)),
    ]
}

/// Profile of the patient currently selected by the account
#[utoipa::path(
    get,
    path = "/common/queryCurrentPatient",
    responses(
        (status = 200, description = "Current patient profile", body = Envelope<PatientInfo>)
    ),
    tag = "common"
)]
pub async fn query_current_patient(State(state): State<AppState>) -> Json<Envelope<PatientInfo>> {
    let mut faker = state.fixtures.faker();
    Json(Envelope::new(PatientInfo::fake(&mut faker)))
}

/// Pretend to send an SMS captcha
#[utoipa::path(
    get,
    path = "/common/sendCaptcha",
    responses(
        (status = 200, description = "Captcha sent", body = Envelope<bool>)
    ),
    tag = "common"
)]
pub async fn send_captcha() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("验证码发送成功"))
}

/// Enum dictionaries keyed by the requested names
///
/// The body is a JSON array of dictionary names; anything else yields a
/// single `default` dictionary.
#[utoipa::path(
    post,
    path = "/common/queryEnumKvList",
    request_body(content = Vec<String>, description = "Dictionary names", example = json!(["sex", "bloodType"])),
    responses(
        (status = 200, description = "Map of dictionary name to entries", body = Value)
    ),
    tag = "common"
)]
pub async fn query_enum_kv_list(
    State(state): State<AppState>,
    LenientJson(body): LenientJson,
) -> Json<Envelope<BTreeMap<String, Vec<EnumKv>>>> {
    let request = EnumKeysRequest::from_body(&body);
    let mut faker = state.fixtures.faker();
    let dictionaries: BTreeMap<String, Vec<EnumKv>> = request
        .keys
        .into_iter()
        .map(|key| {
            let count = faker.count(1, 4);
            (key, faker.multiple(count, EnumKv::fake))
        })
        .collect();
    Json(Envelope::empty().with_data(dictionaries))
}
