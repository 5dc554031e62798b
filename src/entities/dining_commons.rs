use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

/// A dining commons, keyed by its short code (`ortega`, `de-la-guerra`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDiningCommons {
    #[serde(default)]
    pub code: String,
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsParams {
    pub code: String,
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl Entity for UCSBDiningCommons {
    type Id = String;
    type Params = DiningCommonsParams;

    const NAME: &'static str = "UCSBDiningCommons";
    const PATH: &'static str = "/api/ucsbdiningcommons";
    const ID_PARAM: &'static str = "code";
    const TABLE: TableSpec = TableSpec {
        name: "ucsbdiningcommons",
        id_column: "code",
        columns: &[
            "name",
            "has_sack_meal",
            "has_take_out_meal",
            "has_dining_cam",
            "latitude",
            "longitude",
        ],
        generated_id: false,
    };

    fn id(&self) -> String {
        self.code.clone()
    }

    fn with_id(self, code: String) -> Self {
        UCSBDiningCommons { code, ..self }
    }

    fn from_params(p: DiningCommonsParams) -> Self {
        UCSBDiningCommons {
            code: p.code,
            name: p.name,
            has_sack_meal: p.has_sack_meal,
            has_take_out_meal: p.has_take_out_meal,
            has_dining_cam: p.has_dining_cam,
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.name.as_str().into(),
            self.has_sack_meal.into(),
            self.has_take_out_meal.into(),
            self.has_dining_cam.into(),
            self.latitude.into(),
            self.longitude.into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(UCSBDiningCommons {
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            has_sack_meal: row.try_get("has_sack_meal")?,
            has_take_out_meal: row.try_get("has_take_out_meal")?,
            has_dining_cam: row.try_get("has_dining_cam")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
        })
    }
}
