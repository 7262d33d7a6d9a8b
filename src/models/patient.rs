//! Patient records
//!
//! Profile, list summary and self-managed medication shapes served by the
//! `/patient` and `/common` endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DIALYSIS_MODES;
use crate::fixtures::Faker;

const SEXES: &[&str] = &["男", "女"];
const IDENTITY_TYPES: &[&str] = &["居民身份证", "护照", "军官证"];
const BLOOD_TYPES: &[&str] = &["A", "B", "AB", "O"];
const MARITAL_STATUSES: &[&str] = &["未婚", "已婚", "离异"];

/// Full patient profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    pub patient_id: String,
    pub name: String,
    /// Mobile number, duplicated in `telephone`
    pub tele_phone: String,
    pub qr_code: String,
    pub doctor_name: String,
    pub nurse_name: String,
    /// e.g. `"3年"`
    pub dialysis_duration: String,
    pub dialysis_count: i64,
    /// e.g. `"62.5kg"`
    pub dry_weight: String,
    pub sex: String,
    /// `YYYY-MM-DD`
    pub birthday: String,
    pub telephone: String,
    pub identity_type_desc: String,
    pub identity_no: String,
    pub blood_type: String,
    pub marital_status: String,
    pub address: String,
    pub job: String,
    pub medical_history: String,
    pub family_history: String,
    pub allergy_history: String,
    pub surgical_history: String,
}

impl PatientInfo {
    pub fn fake(f: &mut Faker) -> Self {
        let mobile = f.mobile();
        let birthday = f.birthdate(1950, 2015);
        let dry_weight = f.float(40.0, 80.0, 1);
        Self {
            patient_id: f.uuid(),
            name: f.full_name(),
            tele_phone: mobile.clone(),
            qr_code: f.url(),
            doctor_name: f.full_name(),
            nurse_name: f.full_name(),
            dialysis_duration: format!("{}年", f.int(1, 20)),
            dialysis_count: f.int(1, 400),
            dry_weight: format!("{dry_weight:.1}kg"),
            sex: f.pick(SEXES).to_string(),
            birthday: birthday.format("%Y-%m-%d").to_string(),
            telephone: mobile,
            identity_type_desc: f.pick(IDENTITY_TYPES).to_string(),
            identity_no: f.numeric(18),
            blood_type: f.pick(BLOOD_TYPES).to_string(),
            marital_status: f.pick(MARITAL_STATUSES).to_string(),
            address: format!("{}{}", f.city(), f.street_address()),
            job: f.job_title(),
            medical_history: f.sentence(),
            family_history: f.sentence(),
            allergy_history: f.sentence(),
            surgical_history: f.sentence(),
        }
    }
}

/// Row of the bound-patients list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub patient_id: String,
    pub name: String,
    pub tele_phone: String,
    pub identity_no: String,
    /// `1` for the patient currently selected, `0` otherwise
    pub current_patient: u8,
}

impl PatientSummary {
    pub fn fake(f: &mut Faker) -> Self {
        Self {
            patient_id: f.uuid(),
            name: f.full_name(),
            tele_phone: f.mobile(),
            identity_no: f.numeric(18),
            current_patient: 0,
        }
    }

    /// `count` summaries with the first one marked as current.
    pub fn fake_list(f: &mut Faker, count: usize) -> Vec<Self> {
        let mut patients = f.multiple(count, Self::fake);
        if let Some(first) = patients.first_mut() {
            first.current_patient = 1;
        }
        patients
    }
}

/// Medication brought by the patient, with usage counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelfMedication {
    pub drug_spec: String,
    pub total_count: i64,
    pub use_count: i64,
    /// `total_count - use_count`
    pub balance_count: i64,
    pub dialysis_mode_desc: String,
}

impl SelfMedication {
    pub fn fake(f: &mut Faker) -> Self {
        let total_count = f.int(5, 40);
        let use_count = f.int(0, total_count);
        Self {
            drug_spec: format!("{} {}", f.product_name(), f.alpha_upper(3)),
            total_count,
            use_count,
            balance_count: total_count - use_count,
            dialysis_mode_desc: f.pick(DIALYSIS_MODES).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureSource, SeededSource};

    #[test]
    fn test_patient_info_shape() {
        let mut f = SeededSource::new(1).faker();
        let info = PatientInfo::fake(&mut f);
        assert_eq!(info.tele_phone, info.telephone);
        assert_eq!(info.identity_no.len(), 18);
        assert!(info.dry_weight.ends_with("kg"));
        assert!(info.dialysis_duration.ends_with('年'));
        assert!((1..=400).contains(&info.dialysis_count));
        assert_eq!(info.birthday.len(), 10);

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("telePhone").is_some());
        assert!(value.get("telephone").is_some());
        assert!(value.get("identityTypeDesc").is_some());
        assert!(value.get("patient_id").is_none());
    }

    #[test]
    fn test_only_first_summary_is_current() {
        let mut f = SeededSource::new(2).faker();
        let patients = PatientSummary::fake_list(&mut f, 4);
        assert_eq!(patients.len(), 4);
        assert_eq!(patients[0].current_patient, 1);
        assert!(patients[1..].iter().all(|p| p.current_patient == 0));
        assert!(PatientSummary::fake_list(&mut f, 0).is_empty());
    }

    #[test]
    fn test_self_medication_balance() {
        let mut f = SeededSource::new(3).faker();
        for _ in 0..50 {
            let item = SelfMedication::fake(&mut f);
            assert!(item.use_count <= item.total_count);
            assert_eq!(item.balance_count, item.total_count - item.use_count);
            assert!((5..=40).contains(&item.total_count));
        }
    }
}
