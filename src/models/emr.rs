//! Electronic medical record shapes: diagnosis summary and lab results

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DIALYSIS_MODES;
use crate::fixtures::{Faker, format_date};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisInfo {
    pub diagnosis_date: String,
    pub diagnosis_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPlan {
    pub dialysis_mode: String,
    /// e.g. `"3次/周"`
    pub dialysis_frequency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VascularAccess {
    pub content: String,
}

/// Record summary: diagnoses, treatment plans and vascular access notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaseInfo {
    pub diagnosis_info_list: Vec<DiagnosisInfo>,
    pub treatment_plans_info_list: Vec<TreatmentPlan>,
    pub vascular_access_info_list: Vec<VascularAccess>,
}

impl BaseInfo {
    pub fn fake(f: &mut Faker) -> Self {
        let diagnoses = f.count(1, 3);
        let diagnosis_info_list = f.multiple(diagnoses, |f| DiagnosisInfo {
            diagnosis_date: format_date(f.past(5)),
            diagnosis_content: f.sentence(),
        });
        let plans = f.count(1, 2);
        let treatment_plans_info_list = f.multiple(plans, |f| TreatmentPlan {
            dialysis_mode: f.pick(DIALYSIS_MODES).to_string(),
            dialysis_frequency: format!("{}次/周", f.int(1, 5)),
        });
        let accesses = f.count(1, 3);
        let vascular_access_info_list = f.multiple(accesses, |f| VascularAccess {
            content: f.sentence(),
        });
        Self {
            diagnosis_info_list,
            treatment_plans_info_list,
            vascular_access_info_list,
        }
    }
}

/// Lab report header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabItem {
    pub hospital_store_id: String,
    pub patient_id: String,
    pub lab_item_id: String,
    pub lab_item_name: String,
    /// `YYYY-MM-DD`, within the last 120 days
    pub lab_item_date: String,
}

impl LabItem {
    /// Lab item for `patient_id`, or for a random patient when none is given.
    pub fn fake(f: &mut Faker, patient_id: Option<&str>) -> Self {
        let hospital_store_id = f.uuid();
        let patient_id = match patient_id {
            Some(id) => id.to_string(),
            None => f.uuid(),
        };
        Self {
            hospital_store_id,
            patient_id,
            lab_item_id: f.uuid(),
            lab_item_name: format!("{}指标", f.product_material()),
            lab_item_date: format_date(f.recent(120)),
        }
    }
}

/// Single test result of a lab report, with its reference range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabItemDetail {
    #[serde(flatten)]
    pub item: LabItem,
    pub test_item_id: String,
    pub test_item_name: String,
    /// Decimal string with two fraction digits
    pub test_item_result: String,
    pub test_item_min: String,
    pub test_item_max: String,
    /// `1` when the result is flagged as abnormal
    pub test_flag: u8,
}

impl LabItemDetail {
    /// Detail for `lab_item_id` and `patient_id` when supplied; every other
    /// field is freshly generated.
    pub fn fake(f: &mut Faker, lab_item_id: Option<&str>, patient_id: Option<&str>) -> Self {
        let mut item = LabItem::fake(f, patient_id);
        if let Some(id) = lab_item_id {
            item.lab_item_id = id.to_string();
        }
        item.lab_item_name = format!("{}{}检测", f.product_adjective(), f.product());

        let result = f.float(1.0, 200.0, 2);
        let min = f.float(1.0, (result - 5.0).max(1.0), 2);
        let max = min + f.float(1.0, 10.0, 2);
        Self {
            item,
            test_item_id: f.uuid(),
            test_item_name: format!("{}指标", f.chemical_element()),
            test_item_result: format!("{result:.2}"),
            test_item_min: format!("{min:.2}"),
            test_item_max: format!("{max:.2}"),
            test_flag: f.flag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureSource, SeededSource};

    #[test]
    fn test_base_info_list_sizes() {
        let mut f = SeededSource::new(31).faker();
        for _ in 0..20 {
            let info = BaseInfo::fake(&mut f);
            assert!((1..=3).contains(&info.diagnosis_info_list.len()));
            assert!((1..=2).contains(&info.treatment_plans_info_list.len()));
            assert!((1..=3).contains(&info.vascular_access_info_list.len()));
        }
    }

    #[test]
    fn test_lab_item_echoes_patient() {
        let mut f = SeededSource::new(32).faker();
        let item = LabItem::fake(&mut f, Some("P-7"));
        assert_eq!(item.patient_id, "P-7");
        assert!(item.lab_item_name.ends_with("指标"));
        let item = LabItem::fake(&mut f, None);
        assert_eq!(item.patient_id.len(), 36);
    }

    #[test]
    fn test_detail_honours_explicit_id() {
        let mut f = SeededSource::new(33).faker();
        let detail = LabItemDetail::fake(&mut f, Some("ABC"), None);
        assert_eq!(detail.item.lab_item_id, "ABC");
        assert!(detail.item.lab_item_name.ends_with("检测"));

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["labItemId"], "ABC");
        assert!(value.get("testItemResult").is_some());
    }

    #[test]
    fn test_reference_range_is_ordered() {
        let mut f = SeededSource::new(34).faker();
        for _ in 0..100 {
            let detail = LabItemDetail::fake(&mut f, None, None);
            let min: f64 = detail.test_item_min.parse().unwrap();
            let max: f64 = detail.test_item_max.parse().unwrap();
            assert!(min < max);
            assert!(min >= 1.0);
            assert!(detail.test_flag <= 1);
        }
    }
}
