//! # User API Handlers
//!
//! Account endpoints. Everything here confirms success; request bodies are
//! never inspected.

use axum::{extract::State, response::Json, routing::get, routing::post};
use serde::Serialize;
use serde_json::Value;

use super::RouteEntry;
use crate::envelope::Envelope;
use crate::models::LoginProfile;
use crate::server::AppState;

pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/user/modify", post(modify)),
        RouteEntry::new("/user/wechat/login", post(wechat_login)),
        RouteEntry::new(
            "/user/wechat/getUserPhoneNumber",
            get(get_user_phone_number),
        ),
        RouteEntry::new("/user/logout", get(logout)),
        RouteEntry::new("/user/cancel", get(cancel)),
        RouteEntry::new("/user/verifyCaptcha", post(verify_captcha)),
    ]
}

/// Confirmation envelope that also carries the bound phone number at the top level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberResponse {
    #[serde(flatten)]
    pub envelope: Envelope<bool>,
    pub phone_number: String,
}

/// Update account settings
#[utoipa::path(
    post,
    path = "/user/modify",
    responses((status = 200, description = "Account updated", body = Envelope<bool>)),
    tag = "user"
)]
pub async fn modify() -> Json<Envelope<bool>> {
    Json(Envelope::empty().with_data(true))
}

/// Log in through WeChat
#[utoipa::path(
    post,
    path = "/user/wechat/login",
    responses((status = 200, description = "Login profile and session token", body = Envelope<LoginProfile>)),
    tag = "user"
)]
pub async fn wechat_login(State(state): State<AppState>) -> Json<Envelope<LoginProfile>> {
    let mut faker = state.fixtures.faker();
    Json(Envelope::new(LoginProfile::fake(&mut faker)).with_message("登录成功"))
}

/// Phone number bound to the WeChat account
#[utoipa::path(
    get,
    path = "/user/wechat/getUserPhoneNumber",
    responses((status = 200, description = "`data: true` plus a top-level `phoneNumber`", body = Value)),
    tag = "user"
)]
pub async fn get_user_phone_number(State(state): State<AppState>) -> Json<PhoneNumberResponse> {
    let mut faker = state.fixtures.faker();
    Json(PhoneNumberResponse {
        envelope: Envelope::confirmed("手机号获取成功"),
        phone_number: faker.mobile(),
    })
}

#[utoipa::path(
    get,
    path = "/user/logout",
    responses((status = 200, description = "Logged out", body = Envelope<bool>)),
    tag = "user"
)]
pub async fn logout() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("退出成功"))
}

/// Close the account
#[utoipa::path(
    get,
    path = "/user/cancel",
    responses((status = 200, description = "Account closed", body = Envelope<bool>)),
    tag = "user"
)]
pub async fn cancel() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("注销成功"))
}

#[utoipa::path(
    post,
    path = "/user/verifyCaptcha",
    responses((status = 200, description = "Captcha accepted", body = Envelope<bool>)),
    tag = "user"
)]
pub async fn verify_captcha() -> Json<Envelope<bool>> {
    Json(Envelope::confirmed("验证码验证成功"))
}
