//! # Common API Types
//!
//! Request parsing shared by the handlers. Bodies are untrusted: anything
//! that fails to parse degrades to defaults instead of rejecting the request.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::envelope::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_FIXTURE_ITEMS, normalize_positive_int};

/// JSON body extractor that never rejects.
///
/// Missing, unreadable or malformed bodies yield `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Value);

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                debug!(%rejection, "request body unreadable, using defaults");
                return Ok(Self(Value::Null));
            }
        };

        if bytes.is_empty() {
            return Ok(Self(Value::Null));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(error) => {
                debug!(%error, "request body is not valid JSON, using defaults");
                Ok(Self(Value::Null))
            }
        }
    }
}

/// Normalized paging request for list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number (`currentPage`, falling back to `page`; default 1)
    #[schema(example = 1)]
    pub current_page: u64,
    /// Requested page size (default 10); at most 5 records are generated
    #[schema(example = 10)]
    pub page_size: u64,
    /// Patient to attach generated records to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            current_page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            patient_id: None,
        }
    }
}

impl PageRequest {
    /// Resolve each field from an untyped body, defaulting what is unusable.
    pub fn from_body(body: &Value) -> Self {
        let page = body
            .get("currentPage")
            .filter(|value| !value.is_null())
            .or_else(|| body.get("page"));
        Self {
            current_page: normalize_positive_int(page, DEFAULT_PAGE),
            page_size: normalize_positive_int(body.get("pageSize"), DEFAULT_PAGE_SIZE),
            patient_id: body
                .get("patientId")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Number of fixture records to generate: the page size clamped to `1..=5`.
    pub fn fixture_count(&self) -> usize {
        self.page_size.clamp(1, MAX_FIXTURE_ITEMS) as usize
    }
}

/// Dictionary keys requested from `/common/queryEnumKvList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumKeysRequest {
    pub keys: Vec<String>,
}

impl EnumKeysRequest {
    const DEFAULT_KEY: &'static str = "default";

    /// Non-empty strings of a JSON array body, or `["default"]`.
    pub fn from_body(body: &Value) -> Self {
        let mut keys: Vec<String> = body
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|key| !key.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        if keys.is_empty() {
            keys.push(Self::DEFAULT_KEY.to_string());
        }
        Self { keys }
    }
}

/// `?patientId=` query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PatientIdQuery {
    /// Patient to echo into the generated record
    pub patient_id: Option<String>,
}

/// `?hospitalStoreId=` query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HospitalStoreQuery {
    /// Hospital store to echo into the generated records
    pub hospital_store_id: Option<String>,
}

/// `?labItemId=` query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LabItemQuery {
    /// Lab item to echo into the generated record
    pub lab_item_id: Option<String>,
}

/// Query ids only count when present and non-empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    #[test]
    fn test_page_request_defaults() {
        assert_eq!(PageRequest::from_body(&Value::Null), PageRequest::default());
        assert_eq!(PageRequest::from_body(&json!([1, 2])), PageRequest::default());
        assert_eq!(PageRequest::from_body(&json!("text")), PageRequest::default());
    }

    #[test]
    fn test_page_request_reads_fields() {
        let request = PageRequest::from_body(&json!({
            "currentPage": 2,
            "pageSize": "3",
            "patientId": "P-1"
        }));
        assert_eq!(request.current_page, 2);
        assert_eq!(request.page_size, 3);
        assert_eq!(request.patient_id.as_deref(), Some("P-1"));
        assert_eq!(request.fixture_count(), 3);
    }

    #[test]
    fn test_page_falls_back_to_page_field() {
        let request = PageRequest::from_body(&json!({ "page": 4 }));
        assert_eq!(request.current_page, 4);
        let request = PageRequest::from_body(&json!({ "currentPage": null, "page": 5 }));
        assert_eq!(request.current_page, 5);
        let request = PageRequest::from_body(&json!({ "currentPage": 0, "page": 5 }));
        assert_eq!(request.current_page, 1);
    }

    #[test]
    fn test_fixture_count_is_capped() {
        let request = PageRequest::from_body(&json!({ "pageSize": 999 }));
        assert_eq!(request.page_size, 999);
        assert_eq!(request.fixture_count(), 5);
        let request = PageRequest::from_body(&json!({ "pageSize": 0.4 }));
        assert_eq!(request.page_size, 0);
        assert_eq!(request.fixture_count(), 1);
    }

    #[test]
    fn test_non_string_patient_id_is_ignored() {
        let request = PageRequest::from_body(&json!({ "patientId": 12 }));
        assert_eq!(request.patient_id, None);
    }

    #[test]
    fn test_enum_keys() {
        let request = EnumKeysRequest::from_body(&json!(["sex", "", 3, "bloodType"]));
        assert_eq!(request.keys, vec!["sex", "bloodType"]);
        let request = EnumKeysRequest::from_body(&json!({ "keys": ["sex"] }));
        assert_eq!(request.keys, vec!["default"]);
        let request = EnumKeysRequest::from_body(&Value::Null);
        assert_eq!(request.keys, vec!["default"]);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some("a".to_string())), Some("a"));
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
    }

    #[tokio::test]
    async fn test_lenient_json_swallows_bad_bodies() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("{not json"))
            .unwrap();
        let LenientJson(value) = LenientJson::from_request(request, &()).await.unwrap();
        assert_eq!(value, Value::Null);

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let LenientJson(value) = LenientJson::from_request(request, &()).await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_lenient_json_parses_without_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"pageSize": 2}"#))
            .unwrap();
        let LenientJson(value) = LenientJson::from_request(request, &()).await.unwrap();
        assert_eq!(value, json!({ "pageSize": 2 }));
    }
}
