//! Hospital store, doctor team and equipment records

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::fixtures::{Faker, round_to};

const STORE_KINDS: &[&str] = &["诊所", "医院", "门诊"];
const LANGUAGES: &[&str] = &["普通话", "粤语", "英语", "中英双语"];

/// Dialysis center listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HospitalStore {
    pub hospital_store_id: String,
    pub store_name: String,
    /// `0XX-XXXXXXXX`
    pub contact_number: String,
    /// e.g. `08:00-18:00`
    pub business_hours: String,
    pub store_address: String,
    pub photo_url: String,
    /// Comma-joined tags
    pub labels: String,
    /// e.g. `"3.2km"`
    pub distance: String,
    /// `1` when the patient visited recently
    pub recent_visit: u8,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

impl HospitalStore {
    pub fn fake(f: &mut Faker) -> Self {
        let labels = f.multiple(2, |f| f.catch_phrase_adjective()).join("，");
        let store_kind = f.pick(STORE_KINDS);
        Self {
            hospital_store_id: f.uuid(),
            store_name: format!("{}{}", f.city(), store_kind),
            contact_number: format!("0{}-{}", f.numeric(2), f.numeric(8)),
            business_hours: format!("{:02}:00-{:02}:00", f.int(7, 9), f.int(17, 21)),
            store_address: format!("{}{}", f.city(), f.street_address()),
            photo_url: f.image_url(640, 360),
            labels,
            distance: format!("{:.1}km", f.float(0.3, 20.0, 1)),
            recent_visit: f.flag(),
            latitude: round_to(f.float(-90.0, 90.0, 4), 4),
            longitude: round_to(f.float(-180.0, 180.0, 4), 4),
            description: f.sentences(2),
        }
    }

    /// Store with the caller's id when one was supplied.
    pub fn fake_with_id(f: &mut Faker, hospital_store_id: Option<&str>) -> Self {
        let mut store = Self::fake(f);
        if let Some(id) = hospital_store_id {
            store.hospital_store_id = id.to_string();
        }
        store
    }
}

/// Doctor working at a hospital store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorTeam {
    pub hospital_store_id: String,
    pub doctor_id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub photo_url: String,
    pub language: String,
}

impl DoctorTeam {
    pub fn fake(f: &mut Faker, hospital_store_id: Option<&str>) -> Self {
        let hospital_store_id = match hospital_store_id {
            Some(id) => id.to_string(),
            None => f.uuid(),
        };
        Self {
            hospital_store_id,
            doctor_id: f.uuid(),
            name: f.full_name(),
            title: f.job_title(),
            description: f.sentence(),
            photo_url: f.avatar(),
            language: f.pick(LANGUAGES).to_string(),
        }
    }
}

/// Equipment photo with caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub photo_url: String,
    pub description: String,
}

impl Equipment {
    pub fn fake(f: &mut Faker) -> Self {
        Self {
            photo_url: f.image_url(640, 480),
            description: f.product_description(),
        }
    }
}
