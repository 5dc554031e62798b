use super::Entity;
use crate::sql::{PgBindValue, TableSpec};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, Row};

/// A diner's review of one dining commons menu item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    /// 0 to 5; not enforced.
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(alias = "localDateTime")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Entity for MenuItemReview {
    type Id = i64;
    type Params = MenuItemReviewParams;

    const NAME: &'static str = "MenuItemReview";
    const PATH: &'static str = "/api/menuitemreview";
    const ID_PARAM: &'static str = "id";
    const TABLE: TableSpec = TableSpec {
        name: "menuitemreview",
        id_column: "id",
        columns: &["item_id", "reviewer_email", "stars", "date_reviewed", "comments"],
        generated_id: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        MenuItemReview { id, ..self }
    }

    fn from_params(p: MenuItemReviewParams) -> Self {
        MenuItemReview {
            id: 0,
            item_id: p.item_id,
            reviewer_email: p.reviewer_email,
            stars: p.stars,
            date_reviewed: p.date_reviewed,
            comments: p.comments,
        }
    }

    fn bind_values(&self) -> Vec<PgBindValue> {
        vec![
            self.item_id.into(),
            self.reviewer_email.as_str().into(),
            self.stars.into(),
            self.date_reviewed.into(),
            self.comments.as_str().into(),
        ]
    }

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(MenuItemReview {
            id: row.try_get("id")?,
            item_id: row.try_get("item_id")?,
            reviewer_email: row.try_get("reviewer_email")?,
            stars: row.try_get("stars")?,
            date_reviewed: row.try_get("date_reviewed")?,
            comments: row.try_get("comments")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_and_iso_local_time() {
        let review = MenuItemReview {
            id: 1,
            item_id: 27,
            reviewer_email: "cgaucho@ucsb.edu".into(),
            stars: 3,
            date_reviewed: "2022-04-20T12:00:00".parse().unwrap(),
            comments: "bland".into(),
        };
        assert_eq!(
            serde_json::to_string(&review).unwrap(),
            r#"{"id":1,"itemId":27,"reviewerEmail":"cgaucho@ucsb.edu","stars":3,"dateReviewed":"2022-04-20T12:00:00","comments":"bland"}"#
        );
    }

    #[test]
    fn params_accept_legacy_timestamp_name() {
        let p: MenuItemReviewParams = serde_json::from_value(serde_json::json!({
            "itemId": 27,
            "reviewerEmail": "cgaucho@ucsb.edu",
            "stars": 3,
            "localDateTime": "2022-04-20T12:00:00",
            "comments": "bland"
        }))
        .unwrap();
        let review = MenuItemReview::from_params(p);
        assert_eq!(review.id, 0);
        assert_eq!(review.date_reviewed.to_string(), "2022-04-20 12:00:00");
    }
}
