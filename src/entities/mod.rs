//! Persisted record types and the contract the generic repository and handlers rely on.

mod article;
mod dining_commons;
mod dining_commons_menu_item;
mod help_request;
mod menu_item_review;
mod organization;
mod recommendation_request;
mod ucsb_date;

pub use article::{ArticleParams, Articles};
pub use dining_commons::{DiningCommonsParams, UCSBDiningCommons};
pub use dining_commons_menu_item::{DiningCommonsMenuItemParams, UCSBDiningCommonsMenuItems};
pub use help_request::{HelpRequest, HelpRequestParams};
pub use menu_item_review::{MenuItemReview, MenuItemReviewParams};
pub use organization::{OrganizationParams, UCSBOrganizations};
pub use recommendation_request::{RecommendationRequest, RecommendationRequestParams};
pub use ucsb_date::{UCSBDate, UCSBDateParams};

use crate::sql::{PgBindValue, TableSpec};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::PgRow;
use std::fmt::{Debug, Display};

/// Identifier type of an entity: surrogate `i64` or natural `String`.
pub trait Key: Clone + Debug + Display + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Parse the raw query-parameter value.
    fn parse_param(raw: &str) -> Result<Self, String>;
    /// True when the value means "not persisted yet" and storage should assign one.
    fn is_unassigned(&self) -> bool;
    /// Identifier for the `seq`-th generated row, or None when keys are caller-supplied.
    fn generate(seq: i64) -> Option<Self>;
    /// Position in the generated sequence, for keys that have one.
    fn sequence(&self) -> Option<i64>;
    fn bind_value(&self) -> PgBindValue;
}

impl Key for i64 {
    fn parse_param(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse()
            .map_err(|_| format!("invalid id '{}': expected an integer", raw))
    }

    fn is_unassigned(&self) -> bool {
        *self == 0
    }

    fn generate(seq: i64) -> Option<Self> {
        Some(seq)
    }

    fn sequence(&self) -> Option<i64> {
        Some(*self)
    }

    fn bind_value(&self) -> PgBindValue {
        PgBindValue::I64(*self)
    }
}

impl Key for String {
    fn parse_param(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            return Err("id must not be empty".into());
        }
        Ok(raw.to_string())
    }

    fn is_unassigned(&self) -> bool {
        self.is_empty()
    }

    fn generate(_seq: i64) -> Option<Self> {
        None
    }

    fn sequence(&self) -> Option<i64> {
        None
    }

    fn bind_value(&self) -> PgBindValue {
        PgBindValue::Text(self.clone())
    }
}

/// A resource exposed under `PATH` and stored in `TABLE`.
///
/// Row mapping is explicit: `bind_values` must yield one value per `TABLE.columns`
/// entry in the same order, and `from_row` reads the identifier plus those columns.
pub trait Entity: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: Key;
    /// Query parameters accepted by create.
    type Params: DeserializeOwned + Send + 'static;

    /// Name used in not-found and deleted messages.
    const NAME: &'static str;
    /// Base path of the resource routes.
    const PATH: &'static str;
    /// Query parameter carrying the identifier on get, update and delete.
    const ID_PARAM: &'static str;
    const TABLE: TableSpec;

    fn id(&self) -> Self::Id;
    fn with_id(self, id: Self::Id) -> Self;
    fn from_params(params: Self::Params) -> Self;
    fn bind_values(&self) -> Vec<PgBindValue>;
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error>;
}
