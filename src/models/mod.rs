//! # Data Models
//!
//! Typed fixture records served by the mock API. Each record knows how to
//! fake itself from a [`Faker`](crate::fixtures::Faker).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod emr;
pub mod hospital;
pub mod order;
pub mod patient;
pub mod user;
pub mod visit_plan;

pub use emr::{BaseInfo, DiagnosisInfo, LabItem, LabItemDetail, TreatmentPlan, VascularAccess};
pub use hospital::{DoctorTeam, Equipment, HospitalStore};
pub use order::{Order, OrderDetail, OrderItem};
pub use patient::{PatientInfo, PatientSummary, SelfMedication};
pub use user::{EnumKv, LoginProfile};
pub use visit_plan::VisitPlan;

/// Dialysis modalities shared by several records.
pub(crate) const DIALYSIS_MODES: &[&str] = &["血液透析", "腹膜透析", "血滤"];

/// Numeric code paired with its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CodeText {
    pub code: u8,
    pub text: &'static str,
}

impl CodeText {
    pub(crate) const fn new(code: u8, text: &'static str) -> Self {
        Self { code, text }
    }
}

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}
