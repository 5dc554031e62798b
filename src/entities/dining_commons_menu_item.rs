use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDiningCommonsMenuItems {
    #[serde(default)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsMenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for UCSBDiningCommonsMenuItems {
    type Id = i64;
    type Params = DiningCommonsMenuItemParams;

    const NAME: &'static str = "UCSBDiningCommonsMenuItems";
    const PATH: &'static str = "/api/ucsbDiningCommonsMenuItems";
    const ID_PARAM: &'static str = "id";
    const TABLE: TableSpec = TableSpec {
        name: "ucsbdiningcommonsmenuitems",
        id_column: "id",
        columns: &["dining_commons_code", "name", "station"],
        generated_id: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        UCSBDiningCommonsMenuItems { id, ..self }
    }

    fn from_params(p: DiningCommonsMenuItemParams) -> Self {
        UCSBDiningCommonsMenuItems {
            id: 0,
            dining_commons_code: p.dining_commons_code,
            name: p.name,
            station: p.station,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.dining_commons_code.as_str().into(),
            self.name.as_str().into(),
            self.station.as_str().into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(UCSBDiningCommonsMenuItems {
            id: row.try_get("id")?,
            dining_commons_code: row.try_get("dining_commons_code")?,
            name: row.try_get("name")?,
            station: row.try_get("station")?,
        })
    }
}
