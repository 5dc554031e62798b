mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, router, RecordingRepository, ADMIN, USER};
use serde_json::json;
use ucsb_course_api::entities::MenuItemReview;

fn review(id: i64, stars: i32, comments: &str) -> MenuItemReview {
    MenuItemReview {
        id,
        item_id: 27,
        reviewer_email: "cgaucho@ucsb.edu".into(),
        stars,
        date_reviewed: "2022-04-20T12:00:00".parse().unwrap(),
        comments: comments.into(),
    }
}

#[tokio::test]
async fn users_list_reviews() {
    let rows = vec![review(1, 5, "delicious"), review(2, 1, "cold")];
    let repo = RecordingRepository::with_rows(rows.clone());
    let resp = get(&router(&repo), "/api/menuitemreview/all", Some(USER)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, serde_json::to_string(&rows).unwrap());
}

#[tokio::test]
async fn admin_posts_with_legacy_timestamp_param() {
    let repo = RecordingRepository::<MenuItemReview>::empty();
    let resp = post(
        &router(&repo),
        "/api/menuitemreview/post?itemId=27&reviewerEmail=cgaucho@ucsb.edu&stars=3&localDateTime=2022-04-20T12:00:00&comments=bland",
        Some(ADMIN),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, serde_json::to_string(&review(1, 3, "bland")).unwrap());
}

#[tokio::test]
async fn admin_posts_with_date_reviewed_param() {
    let repo = RecordingRepository::<MenuItemReview>::empty();
    let resp = post(
        &router(&repo),
        "/api/menuitemreview/post?itemId=27&reviewerEmail=cgaucho@ucsb.edu&stars=4&dateReviewed=2022-04-20T12:00:00&comments=fine",
        Some(ADMIN),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(repo.last_saved(), Some(review(0, 4, "fine")));
}

#[tokio::test]
async fn unparsable_date_is_a_client_error() {
    let repo = RecordingRepository::<MenuItemReview>::empty();
    let resp = post(
        &router(&repo),
        "/api/menuitemreview/post?itemId=27&reviewerEmail=cgaucho@ucsb.edu&stars=4&dateReviewed=yesterday&comments=fine",
        Some(ADMIN),
    )
    .await;
    assert!(resp.status.is_client_error());
    assert_eq!(repo.saves(), 0);
}

#[tokio::test]
async fn anonymous_post_is_forbidden_even_without_params() {
    let repo = RecordingRepository::<MenuItemReview>::empty();
    let resp = post(&router(&repo), "/api/menuitemreview/post", None).await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn full_lifecycle() {
    let repo = RecordingRepository::with_rows([review(8, 2, "meh")]);
    let app = router(&repo);

    let got = get(&app, "/api/menuitemreview?id=8", Some(USER)).await;
    assert_eq!(got.json()["stars"], 2);

    let body = serde_json::to_string(&review(8, 5, "much better now")).unwrap();
    let updated = put(&app, "/api/menuitemreview?id=8", Some(ADMIN), body.clone()).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body, body);

    let removed = delete(&app, "/api/menuitemreview?id=8", Some(ADMIN)).await;
    assert_eq!(removed.json(), json!({"message": "MenuItemReview with id 8 deleted"}));

    let gone = get(&app, "/api/menuitemreview?id=8", Some(USER)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.json()["message"], "MenuItemReview with id 8 not found");
}
