mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, router, RecordingRepository, ADMIN, USER};
use serde_json::json;
use ucsb_course_api::entities::UCSBDiningCommonsMenuItems;

fn item(id: i64, code: &str, name: &str, station: &str) -> UCSBDiningCommonsMenuItems {
    UCSBDiningCommonsMenuItems {
        id,
        dining_commons_code: code.into(),
        name: name.into(),
        station: station.into(),
    }
}

#[tokio::test]
async fn listing_requires_a_logged_in_user() {
    let rows = vec![
        item(1, "ortega", "Baked Pesto Pasta with Chicken", "Entree Specials"),
        item(2, "portola", "Cream of Broccoli Soup (v)", "Greens & Grains"),
    ];
    let repo = RecordingRepository::with_rows(rows.clone());
    let app = router(&repo);
    assert_eq!(get(&app, "/api/ucsbDiningCommonsMenuItems/all", None).await.status, StatusCode::FORBIDDEN);

    let resp = get(&app, "/api/ucsbDiningCommonsMenuItems/all", Some(USER)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, serde_json::to_string(&rows).unwrap());
}

#[tokio::test]
async fn empty_table_lists_as_empty_array() {
    let repo = RecordingRepository::<UCSBDiningCommonsMenuItems>::empty();
    let resp = get(&router(&repo), "/api/ucsbDiningCommonsMenuItems/all", Some(USER)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "[]");
}

#[tokio::test]
async fn admin_post_ignores_a_supplied_id_and_gets_a_generated_one() {
    let repo = RecordingRepository::with_rows([item(4, "de-la-guerra", "Tofu Banh Mi", "Entrees")]);
    let resp = post(
        &router(&repo),
        "/api/ucsbDiningCommonsMenuItems/post?id=0&diningCommonsCode=diningCommonsCode&name=name&station=station",
        Some(ADMIN),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(repo.last_saved(), Some(item(0, "diningCommonsCode", "name", "station")));
    assert_eq!(resp.json(), json!({"id": 5, "diningCommonsCode": "diningCommonsCode", "name": "name", "station": "station"}));
}

#[tokio::test]
async fn post_missing_a_field_is_rejected_before_saving() {
    let repo = RecordingRepository::<UCSBDiningCommonsMenuItems>::empty();
    let resp = post(&router(&repo), "/api/ucsbDiningCommonsMenuItems/post?name=name&station=station", Some(ADMIN)).await;
    assert!(resp.status.is_client_error());
    assert_eq!(repo.saves(), 0);
}

#[tokio::test]
async fn get_by_id_found_and_missing() {
    let row = item(123, "ortega", "Chicken Caesar Salad", "Salads");
    let repo = RecordingRepository::with_rows([row.clone()]);
    let app = router(&repo);

    let found = get(&app, "/api/ucsbDiningCommonsMenuItems?id=123", Some(USER)).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body, serde_json::to_string(&row).unwrap());

    let missing = get(&app, "/api/ucsbDiningCommonsMenuItems?id=124", Some(USER)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json()["type"], "EntityNotFoundException");
    assert_eq!(missing.json()["message"], "UCSBDiningCommonsMenuItems with id 124 not found");
}

#[tokio::test]
async fn update_replaces_every_field() {
    let repo = RecordingRepository::with_rows([item(9, "ortega", "Old", "Grill")]);
    let body = json!({"diningCommonsCode": "carrillo", "name": "New", "station": "Pizza"}).to_string();
    let resp = put(&router(&repo), "/api/ucsbDiningCommonsMenuItems?id=9", Some(ADMIN), body).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({"id": 9, "diningCommonsCode": "carrillo", "name": "New", "station": "Pizza"}));
}

#[tokio::test]
async fn update_with_malformed_body_never_saves() {
    let repo = RecordingRepository::with_rows([item(9, "ortega", "Old", "Grill")]);
    let resp = put(&router(&repo), "/api/ucsbDiningCommonsMenuItems?id=9", Some(ADMIN), "{\"name\": 5}".into()).await;
    assert!(resp.status.is_client_error());
    assert_eq!(repo.saves(), 0);
}

#[tokio::test]
async fn delete_found_and_missing() {
    let repo = RecordingRepository::with_rows([item(3, "ortega", "Soup", "Soups")]);
    let app = router(&repo);
    let missing = delete(&app, "/api/ucsbDiningCommonsMenuItems?id=4", Some(ADMIN)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(repo.deletes(), 0);

    let found = delete(&app, "/api/ucsbDiningCommonsMenuItems?id=3", Some(ADMIN)).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.json()["message"], "UCSBDiningCommonsMenuItems with id 3 deleted");
    assert_eq!(repo.deletes(), 1);
}

#[tokio::test]
async fn users_cannot_delete() {
    let repo = RecordingRepository::with_rows([item(3, "ortega", "Soup", "Soups")]);
    let resp = delete(&router(&repo), "/api/ucsbDiningCommonsMenuItems?id=3", Some(USER)).await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(repo.lookups(), 0);
    assert_eq!(repo.deletes(), 0);
}
