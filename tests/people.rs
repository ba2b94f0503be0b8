mod common;

use axum::http::StatusCode;
use common::{assert_error, TestApp};
use serde_json::json;

#[tokio::test]
async fn unknown_home_planet_is_rejected() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/people",
            json!({"name": "Luke Skywalker", "age": "19BBY", "eye_color": "blue", "home_planet_id": 99}),
        )
        .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = app.get("/people").await;
    assert_eq!(list["meta"]["count"], 0);
}

#[tokio::test]
async fn person_without_home_planet_is_allowed() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post("/people", json!({"name": "Yoda", "age": "896BBY", "eye_color": "brown"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["home_planet_id"].is_null());
    assert_eq!(body["data"]["age"], "896BBY");
}

#[tokio::test]
async fn deleted_person_leaves_the_list() {
    let app = TestApp::spawn().await;
    let luke = app
        .create("/people", json!({"name": "Luke Skywalker", "age": "19BBY", "eye_color": "blue"}))
        .await;
    let leia = app
        .create("/people", json!({"name": "Leia Organa", "age": "19BBY", "eye_color": "brown"}))
        .await;

    let (status, _) = app.delete(&format!("/people/{luke}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.get("/people").await;
    let ids: Vec<i64> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![leia]);

    let (status, body) = app.get(&format!("/people/{luke}")).await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_replaces_person_and_home_planet() {
    let app = TestApp::spawn().await;
    let tatooine = app
        .create("/planet", json!({"name": "Tatooine", "climate": "Arid", "population": 200000}))
        .await;
    let id = app
        .create("/people", json!({"name": "Anakin", "age": "41.9BBY", "eye_color": "blue"}))
        .await;

    let (status, body) = app
        .put(
            &format!("/people/{id}"),
            json!({"name": "Darth Vader", "age": "41.9BBY", "eye_color": "yellow", "home_planet_id": tatooine}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["home_planet_id"], tatooine);

    let (_, body) = app.get(&format!("/people/{id}")).await;
    assert_eq!(body["data"]["name"], "Darth Vader");
    assert_eq!(body["data"]["eye_color"], "yellow");

    let (status, body) = app
        .put(
            &format!("/people/{id}"),
            json!({"name": "Darth Vader", "age": "41.9BBY", "eye_color": "yellow", "home_planet_id": 12345}),
        )
        .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = app
        .put("/people/777", json!({"name": "Nobody", "age": "0", "eye_color": "none"}))
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/people/luke").await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_person_matches_listing() {
    let app = TestApp::spawn().await;
    let planet = app
        .create("/planet", json!({"name": "Naboo", "climate": "Temperate", "population": 4500000000i64}))
        .await;

    let (status, created) = app
        .post(
            "/people",
            json!({"name": "Padme Amidala", "age": "46BBY", "eye_color": "brown", "home_planet_id": planet}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["home_planet_id"], planet);

    let (_, list) = app.get("/people").await;
    assert_eq!(list["meta"]["count"], 1);
    assert_eq!(list["data"][0], created["data"]);
}
