//! Dialysis visit plans and completed visit records

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DIALYSIS_MODES;
use crate::fixtures::{Faker, format_date, format_time, round_to, week_label};

const SHIFT_TYPES: &[&str] = &["上午", "下午", "晚班"];
const VISIT_STATUSES: &[&str] = &["待就诊", "进行中", "已完成", "已取消"];

/// Status used for historical medical records.
pub const COMPLETED_STATUS: &str = "已完成";

/// One scheduled (or past) dialysis session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitPlan {
    /// `YYYY-MM-DD`
    pub schedule_date: String,
    pub shift_type: String,
    /// `周日` .. `周六`
    pub week: String,
    pub bed_label: String,
    pub dialysis_mode_desc: String,
    pub status: String,
    pub dry_weight: String,
    /// `"{schedule_date} {shift_type}"`
    pub detail_date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`, three to five hours after `start_time`
    pub end_time: String,
    pub dialysis_count: i64,
    pub amount: f64,
    /// Share of `amount` covered by medical insurance
    pub mi_amount: f64,
    pub clothing_weight: String,
    pub pre_hd_weight: String,
    pub post_hd_weight: String,
    pub pre_hd_blood_pressure: String,
    pub pre_hd_heart_rate: String,
    pub pre_hd_temp: String,
    pub post_hd_blood_pressure: String,
    pub post_hd_heart_rate: String,
    pub post_hd_temp: String,
}

impl VisitPlan {
    /// Upcoming session within the next 60 days.
    pub fn fake(f: &mut Faker) -> Self {
        let scheduled = f.soon(60);
        let status = f.pick(VISIT_STATUSES).to_string();
        Self::fake_at(f, scheduled, status)
    }

    /// Completed session within the last 180 days.
    pub fn fake_record(f: &mut Faker) -> Self {
        let scheduled = f.recent(180);
        Self::fake_at(f, scheduled, COMPLETED_STATUS.to_string())
    }

    fn fake_at(f: &mut Faker, scheduled: DateTime<Utc>, status: String) -> Self {
        let shift_type = f.pick(SHIFT_TYPES).to_string();
        let ends = scheduled + Duration::hours(f.int(3, 5));
        let amount = f.float(200.0, 800.0, 2);
        let mi_ratio = f.float(0.2, 0.6, 2);
        let pre_weight = f.float(50.0, 80.0, 1);
        let post_weight = (pre_weight - f.float(0.5, 3.0, 1)).max(35.0);
        let schedule_date = format_date(scheduled);
        Self {
            detail_date: format!("{schedule_date} {shift_type}"),
            week: week_label(scheduled),
            schedule_date,
            shift_type,
            bed_label: format!("床位{}", f.int(1, 30)),
            dialysis_mode_desc: f.pick(DIALYSIS_MODES).to_string(),
            status,
            dry_weight: format!("{:.1}kg", f.float(40.0, 80.0, 1)),
            start_time: format_time(scheduled),
            end_time: format_time(ends),
            dialysis_count: f.int(1, 500),
            amount,
            mi_amount: round_to(amount * mi_ratio, 2),
            clothing_weight: format!("{:.1}kg", f.float(0.5, 2.5, 1)),
            pre_hd_weight: format!("{pre_weight:.1}kg"),
            post_hd_weight: format!("{post_weight:.1}kg"),
            pre_hd_blood_pressure: blood_pressure(f),
            pre_hd_heart_rate: f.int(60, 100).to_string(),
            pre_hd_temp: format!("{:.1}", f.float(36.0, 37.5, 1)),
            post_hd_blood_pressure: blood_pressure(f),
            post_hd_heart_rate: f.int(60, 100).to_string(),
            post_hd_temp: format!("{:.1}", f.float(36.0, 37.5, 1)),
        }
    }
}

fn blood_pressure(f: &mut Faker) -> String {
    format!("{}/{}", f.int(100, 140), f.int(60, 90))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureSource, SeededSource};
    use chrono::TimeZone;

    fn faker() -> Faker {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        SeededSource::new(4).with_now(now).faker()
    }

    fn kg(value: &str) -> f64 {
        value.trim_end_matches("kg").parse().unwrap()
    }

    #[test]
    fn test_upcoming_plan_is_in_the_future() {
        let mut f = faker();
        let plan = VisitPlan::fake(&mut f);
        assert!(plan.schedule_date.as_str() >= "2025-06-01");
        assert!(plan.schedule_date.as_str() <= "2025-07-31");
        assert_eq!(
            plan.detail_date,
            format!("{} {}", plan.schedule_date, plan.shift_type)
        );
        assert!(VISIT_STATUSES.contains(&plan.status.as_str()));
        assert!(plan.week.starts_with('周'));
    }

    #[test]
    fn test_record_is_completed_and_in_the_past() {
        let mut f = faker();
        for _ in 0..20 {
            let record = VisitPlan::fake_record(&mut f);
            assert_eq!(record.status, COMPLETED_STATUS);
            assert!(record.schedule_date.as_str() <= "2025-06-01");
        }
    }

    #[test]
    fn test_weights_and_amounts() {
        let mut f = faker();
        for _ in 0..50 {
            let plan = VisitPlan::fake(&mut f);
            assert!(kg(&plan.post_hd_weight) <= kg(&plan.pre_hd_weight));
            assert!(kg(&plan.post_hd_weight) >= 35.0);
            assert!(plan.mi_amount <= plan.amount);
            assert!(plan.pre_hd_blood_pressure.contains('/'));
            assert_eq!(plan.start_time.len(), 5);
        }
    }
}
