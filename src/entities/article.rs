use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

/// A link to an article, shared by a member of the course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Articles {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Entity for Articles {
    type Id = i64;
    type Params = ArticleParams;

    const NAME: &'static str = "Articles";
    const PATH: &'static str = "/api/articles";
    const ID_PARAM: &'static str = "id";
    const TABLE: TableSpec = TableSpec {
        name: "articles",
        id_column: "id",
        columns: &["title", "url", "explanation", "email", "date_added"],
        generated_id: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Articles { id, ..self }
    }

    fn from_params(p: ArticleParams) -> Self {
        Articles {
            id: 0,
            title: p.title,
            url: p.url,
            explanation: p.explanation,
            email: p.email,
            date_added: p.date_added,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.title.as_str().into(),
            self.url.as_str().into(),
            self.explanation.as_str().into(),
            self.email.as_str().into(),
            self.date_added.into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Articles {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            explanation: row.try_get("explanation")?,
            email: row.try_get("email")?,
            date_added: row.try_get("date_added")?,
        })
    }
}
