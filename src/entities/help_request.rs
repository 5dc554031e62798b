use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

/// A team's request for help during a lab or section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Entity for HelpRequest {
    type Id = i64;
    type Params = HelpRequestParams;

    const NAME: &'static str = "HelpRequest";
    const PATH: &'static str = "/api/helprequests";
    const ID_PARAM: &'static str = "id";
    const TABLE: TableSpec = TableSpec {
        name: "helprequest",
        id_column: "id",
        columns: &[
            "requester_email",
            "team_id",
            "table_or_breakout_room",
            "request_time",
            "explanation",
            "solved",
        ],
        generated_id: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        HelpRequest { id, ..self }
    }

    fn from_params(p: HelpRequestParams) -> Self {
        HelpRequest {
            id: 0,
            requester_email: p.requester_email,
            team_id: p.team_id,
            table_or_breakout_room: p.table_or_breakout_room,
            request_time: p.request_time,
            explanation: p.explanation,
            solved: p.solved,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.requester_email.as_str().into(),
            self.team_id.as_str().into(),
            self.table_or_breakout_room.as_str().into(),
            self.request_time.into(),
            self.explanation.as_str().into(),
            self.solved.into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(HelpRequest {
            id: row.try_get("id")?,
            requester_email: row.try_get("requester_email")?,
            team_id: row.try_get("team_id")?,
            table_or_breakout_room: row.try_get("table_or_breakout_room")?,
            request_time: row.try_get("request_time")?,
            explanation: row.try_get("explanation")?,
            solved: row.try_get("solved")?,
        })
    }
}
