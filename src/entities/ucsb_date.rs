use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

/// A named date in the academic calendar, tagged with its quarter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDate {
    #[serde(default)]
    pub id: i64,
    /// Year and quarter digit, e.g. `20221` for Winter 2022.
    #[serde(rename = "quarterYYYYQ")]
    pub quarter_yyyyq: String,
    pub name: String,
    pub local_date_time: NaiveDateTime,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UCSBDateParams {
    #[serde(rename = "quarterYYYYQ")]
    pub quarter_yyyyq: String,
    pub name: String,
    pub local_date_time: NaiveDateTime,
}

impl Entity for UCSBDate {
    type Id = i64;
    type Params = UCSBDateParams;

    const NAME: &'static str = "UCSBDate";
    const PATH: &'static str = "/api/ucsbdates";
    const ID_PARAM: &'static str = "id";
    const TABLE: TableSpec = TableSpec {
        name: "ucsbdates",
        id_column: "id",
        columns: &["quarter_yyyyq", "name", "local_date_time"],
        generated_id: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        UCSBDate { id, ..self }
    }

    fn from_params(p: UCSBDateParams) -> Self {
        UCSBDate {
            id: 0,
            quarter_yyyyq: p.quarter_yyyyq,
            name: p.name,
            local_date_time: p.local_date_time,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.quarter_yyyyq.as_str().into(),
            self.name.as_str().into(),
            self.local_date_time.into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(UCSBDate {
            id: row.try_get("id")?,
            quarter_yyyyq: row.try_get("quarter_yyyyq")?,
            name: row.try_get("name")?,
            local_date_time: row.try_get("local_date_time")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_keeps_its_upper_case_json_name() {
        let date = UCSBDate {
            id: 1,
            quarter_yyyyq: "20221".into(),
            name: "noon on January 2nd".into(),
            local_date_time: "2022-01-02T12:00:00".parse().unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            r#"{"id":1,"quarterYYYYQ":"20221","name":"noon on January 2nd","localDateTime":"2022-01-02T12:00:00"}"#
        );
    }
}
