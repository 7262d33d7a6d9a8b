//! Account records returned by the `/user` endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::fixtures::{Faker, format_date};

const SEXES: &[&str] = &["male", "female", "other"];

/// Profile returned after a successful WeChat login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginProfile {
    pub token: String,
    pub phone_number: String,
    pub photo_url: String,
    pub nick_name: String,
    pub sex: String,
    /// `YYYY-MM-DD`
    pub birthday: String,
    pub chunxi_health_id: String,
}

impl LoginProfile {
    pub fn fake(f: &mut Faker) -> Self {
        Self {
            token: f.uuid(),
            phone_number: f.mobile(),
            photo_url: f.avatar(),
            nick_name: f.first_name(),
            sex: f.pick(SEXES).to_string(),
            birthday: format_date(f.past(1)),
            chunxi_health_id: f.uuid(),
        }
    }
}

/// `{ text }` label of an enum entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnumLabel {
    pub text: String,
}

/// `{ code }` value of an enum entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnumValue {
    pub code: String,
}

/// Display properties of an enum entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnumProps {
    pub color: String,
}

/// Key/value entry of a dictionary served by `/common/queryEnumKvList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnumKv {
    pub label: EnumLabel,
    pub value: EnumValue,
    pub props: EnumProps,
}

impl EnumKv {
    pub fn fake(f: &mut Faker) -> Self {
        Self {
            label: EnumLabel {
                text: f.product_adjective(),
            },
            value: EnumValue { code: f.uuid() },
            props: EnumProps {
                color: f.human_color(),
            },
        }
    }
}
