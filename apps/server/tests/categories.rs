mod common;

use axum::http::{Method, StatusCode};
use common::spawn_app;
use serde_json::{json, Value};

fn find<'a>(categories: &'a Value, name: &str) -> &'a Value {
    categories
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .unwrap()
}

#[tokio::test]
async fn defaults_are_seeded_and_shared() {
    let app = spawn_app().await;
    let token = app.register("Ada", "ada@example.com", "pw").await;

    let response = app
        .request(Method::GET, "/categories", Some(&token), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let categories = response.json();
    assert_eq!(categories.as_array().unwrap().len(), 8);
    assert_eq!(find(&categories, "Food")["isDefault"], true);

    let names: Vec<&str> = categories
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn custom_categories() {
    let app = spawn_app().await;
    let ada = app.register("Ada", "ada@example.com", "pw").await;
    let bob = app.register("Bob", "bob@example.com", "pw").await;

    let created = app
        .request(
            Method::POST,
            "/categories",
            Some(&ada),
            Some(json!({ "name": "Pets", "description": "Cat food" })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let pets = created.json();
    assert_eq!(pets["isDefault"], false);
    let pets_id = pets["id"].as_i64().unwrap();

    let duplicate = app
        .request(Method::POST, "/categories", Some(&ada), Some(json!({ "name": "Pets" })))
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let shadows_default = app
        .request(Method::POST, "/categories", Some(&bob), Some(json!({ "name": "Food" })))
        .await;
    assert_eq!(shadows_default.status, StatusCode::CONFLICT);

    let bobs_pets = app
        .request(Method::POST, "/categories", Some(&bob), Some(json!({ "name": "Pets" })))
        .await;
    assert_eq!(bobs_pets.status, StatusCode::CREATED);

    let bob_list = app.request(Method::GET, "/categories", Some(&bob), None).await;
    assert_eq!(bob_list.json().as_array().unwrap().len(), 9);

    let foreign_delete = app
        .request(Method::DELETE, &format!("/categories/{pets_id}"), Some(&bob), None)
        .await;
    assert_eq!(foreign_delete.status, StatusCode::FORBIDDEN);

    let own_delete = app
        .request(Method::DELETE, &format!("/categories/{pets_id}"), Some(&ada), None)
        .await;
    assert_eq!(own_delete.status, StatusCode::NO_CONTENT);

    let missing = app
        .request(Method::DELETE, &format!("/categories/{pets_id}"), Some(&ada), None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn default_categories_cannot_be_deleted() {
    let app = spawn_app().await;
    let token = app.register("Ada", "ada@example.com", "pw").await;
    let categories = app
        .request(Method::GET, "/categories", Some(&token), None)
        .await
        .json();
    let food_id = find(&categories, "Food")["id"].as_i64().unwrap();

    let response = app
        .request(Method::DELETE, &format!("/categories/{food_id}"), Some(&token), None)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json()["message"], "Default categories cannot be deleted");
}
