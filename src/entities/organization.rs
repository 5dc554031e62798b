use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

/// Student organization keyed by its registrar code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UCSBOrganizations {
    /// Natural key. Optional in update bodies, where the `code` query parameter wins.
    #[serde(default)]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Entity for UCSBOrganizations {
    type Id = String;
    type Params = OrganizationParams;

    const NAME: &'static str = "UCSBOrganizations";
    const PATH: &'static str = "/api/ucsborganizations";
    const ID_PARAM: &'static str = "code";
    const TABLE: TableSpec = TableSpec {
        name: "ucsborganizations",
        id_column: "org_code",
        columns: &["org_translation_short", "org_translation", "inactive"],
        generated_id: false,
    };

    fn id(&self) -> String {
        self.org_code.clone()
    }

    fn with_id(self, org_code: String) -> Self {
        UCSBOrganizations { org_code, ..self }
    }

    fn from_params(p: OrganizationParams) -> Self {
        UCSBOrganizations {
            org_code: p.org_code,
            org_translation_short: p.org_translation_short,
            org_translation: p.org_translation,
            inactive: p.inactive,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.org_translation_short.as_str().into(),
            self.org_translation.as_str().into(),
            self.inactive.into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(UCSBOrganizations {
            org_code: row.try_get("org_code")?,
            org_translation_short: row.try_get("org_translation_short")?,
            org_translation: row.try_get("org_translation")?,
            inactive: row.try_get("inactive")?,
        })
    }
}
