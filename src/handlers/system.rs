//! Caller identity and deployment info, read by the frontend on page load.

use crate::config::SystemInfo;
use crate::extractors::Principal;
use crate::response::ok;
use axum::{extract::State, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
pub struct CurrentUser {
    pub user: UserInfo,
    /// Highest role last.
    pub roles: Vec<Authority>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct UserInfo {
    pub email: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Authority {
    pub authority: &'static str,
}

impl From<Principal> for CurrentUser {
    fn from(principal: Principal) -> Self {
        CurrentUser {
            roles: principal
                .roles
                .iter()
                .map(|r| Authority { authority: r.authority() })
                .collect(),
            user: UserInfo { email: principal.email },
        }
    }
}

pub async fn current_user(principal: Principal) -> impl IntoResponse {
    ok(CurrentUser::from(principal))
}

pub async fn system_info(State(info): State<SystemInfo>) -> impl IntoResponse {
    ok(info)
}
