//! Extract the authenticated principal forwarded by the upstream identity provider.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::collections::BTreeSet;

/// Header carrying the authenticated user's email.
pub const USER_HEADER: &str = "X-Auth-User";
/// Header carrying the comma-separated role list, e.g. `ROLE_USER,ROLE_ADMIN`.
pub const ROLES_HEADER: &str = "X-Auth-Roles";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse `USER`, `ROLE_USER`, `admin`, ... Unknown names yield None.
    pub fn parse(raw: &str) -> Option<Role> {
        let name = raw.trim().to_ascii_uppercase();
        match name.strip_prefix("ROLE_").unwrap_or(name.as_str()) {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Authority name in the upstream form, `ROLE_USER` or `ROLE_ADMIN`.
    pub fn authority(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => f.write_str("USER"),
            Role::Admin => f.write_str("ADMIN"),
        }
    }
}

/// Caller identity. No roles means anonymous.
#[derive(Clone, Debug, Default)]
pub struct Principal {
    pub email: Option<String>,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    pub fn is_anonymous(&self) -> bool {
        self.roles.is_empty()
    }

    /// ADMIN satisfies a USER requirement.
    pub fn has_role(&self, required: Role) -> bool {
        self.roles.iter().any(|r| *r >= required)
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let roles = header(parts, ROLES_HEADER)
            .map(|v| v.split(',').filter_map(Role::parse).collect())
            .unwrap_or_default();
        Ok(Principal {
            email: header(parts, USER_HEADER).map(str::to_string),
            roles,
        })
    }
}
