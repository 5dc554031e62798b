use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

/// A student's request for a letter of recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Entity for RecommendationRequest {
    type Id = i64;
    type Params = RecommendationRequestParams;

    const NAME: &'static str = "RecommendationRequest";
    const PATH: &'static str = "/api/RecommendationRequest";
    const ID_PARAM: &'static str = "id";
    const TABLE: TableSpec = TableSpec {
        name: "recommendationrequest",
        id_column: "id",
        columns: &[
            "requester_email",
            "professor_email",
            "explanation",
            "date_requested",
            "date_needed",
            "done",
        ],
        generated_id: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        RecommendationRequest { id, ..self }
    }

    fn from_params(p: RecommendationRequestParams) -> Self {
        RecommendationRequest {
            id: 0,
            requester_email: p.requester_email,
            professor_email: p.professor_email,
            explanation: p.explanation,
            date_requested: p.date_requested,
            date_needed: p.date_needed,
            done: p.done,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.requester_email.as_str().into(),
            self.professor_email.as_str().into(),
            self.explanation.as_str().into(),
            self.date_requested.into(),
            self.date_needed.into(),
            self.done.into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(RecommendationRequest {
            id: row.try_get("id")?,
            requester_email: row.try_get("requester_email")?,
            professor_email: row.try_get("professor_email")?,
            explanation: row.try_get("explanation")?,
            date_requested: row.try_get("date_requested")?,
            date_needed: row.try_get("date_needed")?,
            done: row.try_get("done")?,
        })
    }
}
