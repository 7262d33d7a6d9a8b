//! # Tests for Handlers
//!
//! This module contains unit tests for API handlers.

use axum::{
    body::{Body, to_bytes},
    extract::{Query, State},
    http::{Request, StatusCode},
    response::Json,
};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::fixtures::SeededSource;
use crate::handlers::types::{HospitalStoreQuery, LabItemQuery, LenientJson, PatientIdQuery};
use crate::handlers::{common, emr, hospital, patient, registry, root, user};
use crate::models::visit_plan::COMPLETED_STATUS;
use crate::server::{AppState, create_app};

fn seeded_state(seed: u64) -> AppState {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    AppState::new(AppConfig::default()).with_fixtures(SeededSource::new(seed).with_now(now))
}

async fn call(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = create_app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_handler_returns_expected_service_info() {
    let Json(service_info) = root().await;

    assert_eq!(service_info.service, "medmock");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_registry_paths_are_unique() {
    let routes = registry();
    let mut paths: Vec<&str> = routes.iter().map(|route| route.path).collect();
    let total = paths.len();
    paths.sort_unstable();
    paths.dedup();

    assert_eq!(paths.len(), total);
    assert!(paths.contains(&"/emr/lab/queryLabItemList"));
    assert!(paths.contains(&"/healthz"));
}

#[tokio::test]
async fn test_patient_list_marks_first_patient_current() {
    let Json(page) = patient::query_patient_list(
        State(seeded_state(1)),
        LenientJson(json!({ "currentPage": "3", "pageSize": 4 })),
    )
    .await;

    assert_eq!(page.page, 3);
    assert_eq!(page.size, 4);
    assert!(page.total >= 4 && page.total <= 16);
    assert_eq!(page.data[0].current_patient, 1);
    assert!(page.data[1..].iter().all(|p| p.current_patient == 0));
}

#[tokio::test]
async fn test_list_reads_page_when_current_page_missing() {
    let Json(page) = patient::query_order_list(
        State(seeded_state(2)),
        LenientJson(json!({ "page": 4, "pageSize": 2 })),
    )
    .await;

    assert_eq!(page.page, 4);
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn test_non_positive_paging_values_fall_back() {
    let Json(page) = hospital::query_hospital_list(
        State(seeded_state(3)),
        LenientJson(json!({ "currentPage": -2, "pageSize": 0 })),
    )
    .await;

    assert_eq!(page.page, 1);
    assert_eq!(page.data.len(), 5);
}

#[tokio::test]
async fn test_patient_detail_echoes_only_non_empty_id() {
    let query = PatientIdQuery {
        patient_id: Some("P-42".to_string()),
    };
    let Json(envelope) = patient::detail(State(seeded_state(4)), Ok(Query(query))).await;
    assert_eq!(envelope.data.patient_id, "P-42");

    let query = PatientIdQuery {
        patient_id: Some(String::new()),
    };
    let Json(envelope) = patient::detail(State(seeded_state(4)), Ok(Query(query))).await;
    assert!(!envelope.data.patient_id.is_empty());
    assert_ne!(envelope.data.patient_id, "P-42");
}

#[tokio::test]
async fn test_item_detail_keeps_generated_id_without_query() {
    let Json(envelope) = emr::query_item_detail(
        State(seeded_state(5)),
        Ok(Query(LabItemQuery::default())),
    )
    .await;

    assert!(envelope.success);
    assert_eq!(envelope.data.item.lab_item_id.len(), 36);
}

#[tokio::test]
async fn test_doctor_teams_are_single_page() {
    let query = HospitalStoreQuery {
        hospital_store_id: Some("H-1".to_string()),
    };
    let Json(page) = hospital::query_doctor_teams(State(seeded_state(6)), Ok(Query(query))).await;

    assert!((1..=5).contains(&page.data.len()));
    assert_eq!(page.page, 1);
    assert_eq!(page.total, page.size);
    assert!(page.data.iter().all(|doctor| doctor.hospital_store_id == "H-1"));
}

#[tokio::test]
async fn test_medical_records_are_completed() {
    let Json(page) = patient::query_medical_records(State(seeded_state(7))).await;

    assert!(!page.data.is_empty());
    assert!(page.data.iter().all(|record| record.status == COMPLETED_STATUS));
}

#[tokio::test]
async fn test_login_carries_message() {
    let Json(envelope) = user::wechat_login(State(seeded_state(8))).await;

    assert!(envelope.success);
    assert_eq!(envelope.message, "登录成功");
    assert!(!envelope.data.token.is_empty());
}

#[tokio::test]
async fn test_enum_dictionaries_default_key() {
    let Json(envelope) =
        common::query_enum_kv_list(State(seeded_state(9)), LenientJson(Value::Null)).await;

    assert_eq!(envelope.data.len(), 1);
    assert!(envelope.data.contains_key("default"));
}

#[tokio::test]
async fn test_seeded_handlers_are_reproducible() {
    let body = || LenientJson(json!({ "pageSize": 3 }));
    let Json(first) = emr::query_lab_item_list(State(seeded_state(10)), body()).await;
    let Json(second) = emr::query_lab_item_list(State(seeded_state(10)), body()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_router_serves_malformed_body_with_defaults() {
    let request = Request::builder()
        .method("POST")
        .uri("/patient/visitPlan/queryVisitPlanList")
        .header("content-type", "application/json")
        .body(Body::from("{\"currentPage\": "))
        .unwrap();

    let (status, body) = call(seeded_state(11), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["page"], 1);
    assert_eq!(body["size"], 5);
    assert!(body.get("code").is_none());
}

#[tokio::test]
async fn test_router_accepts_bad_query_string() {
    let request = Request::builder()
        .uri("/hospital/queryDetail?hospitalStoreId=a&hospitalStoreId=b")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(seeded_state(12), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["hospitalStoreId"].is_string());
}

#[tokio::test]
async fn test_router_serves_switch_patient_on_both_methods() {
    for method in ["GET", "POST"] {
        let request = Request::builder()
            .method(method)
            .uri("/patient/switchPatient")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(seeded_state(13), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], true);
        assert_eq!(body["message"], "切换成功");
    }
}
