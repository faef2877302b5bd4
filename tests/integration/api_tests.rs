//! API integration tests
//!
//! These run against a live server with a migrated database.

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Unique email so tests can run repeatedly against the same database
fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4().simple())
}

async fn sign_up_organiser(client: &Client, email: &str) {
    let response = client
        .post(format!("{}/auth/signup/organiser", BASE_URL))
        .json(&json!({
            "name": "E2E Organiser",
            "email": email,
            "password": "12345678",
            "address": "123 Main St",
            "business_name": "Test Business",
            "business_category": "Entertainment",
            "registration_number": "123456789",
            "phone_number": "1234567890",
            "website_url": "https://example.com",
            "facebook_url": "https://facebook.com/example"
        }))
        .send()
        .await
        .expect("Failed to send sign-up request");
    assert_eq!(response.status(), 201);
}

async fn sign_up_customer(client: &Client, email: &str) {
    let response = client
        .post(format!("{}/auth/signup/customer", BASE_URL))
        .json(&json!({
            "name": "E2E Customer",
            "email": email,
            "password": "12345678"
        }))
        .send()
        .await
        .expect("Failed to send sign-up request");
    assert_eq!(response.status(), 201);
}

async fn sign_in(client: &Client, role: &str, email: &str) -> String {
    let response = client
        .post(format!("{}/auth/signin/{}", BASE_URL, role))
        .json(&json!({ "email": email, "password": "12345678" }))
        .send()
        .await
        .expect("Failed to send sign-in request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse sign-in response");
    body["access_token"].as_str().expect("No access_token in response").to_string()
}

async fn create_event(client: &Client, token: &str) -> String {
    let response = client
        .post(format!("{}/events", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "name": "Mountain Hiking",
            "description": "Fresh air and mountain trails",
            "price": "200.0",
            "address": "123 Mountain Rd",
            "total_ticket": "20",
            "date": "2025-03-26",
            "time": "11:30:00",
            "age_range": "6-10",
            "instruction": "Parent supervision is required",
            "category": "Outing"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("No id in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/favorites", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_sign_up_conflicts() {
    let client = Client::new();
    let email = unique_email("dup");
    sign_up_customer(&client, &email).await;

    let response = client
        .post(format!("{}/auth/signup/customer", BASE_URL))
        .json(&json!({ "name": "Again", "email": email, "password": "12345678" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_event_lifecycle() {
    let client = Client::new();

    let organiser_email = unique_email("organiser");
    let customer_email = unique_email("customer");
    sign_up_organiser(&client, &organiser_email).await;
    sign_up_customer(&client, &customer_email).await;
    let organiser = sign_in(&client, "organiser", &organiser_email).await;
    let customer = sign_in(&client, "customer", &customer_email).await;

    let event_id = create_event(&client, &organiser).await;
    let event_url = format!("{}/events/{}", BASE_URL, event_id);

    // Any role can read
    let response = client
        .get(format!("{}/events", BASE_URL))
        .bearer_auth(&customer)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(&event_url)
        .bearer_auth(&customer)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Mountain Hiking");
    assert_eq!(body["total_ticket"], 20);

    // Customers cannot write
    let response = client
        .patch(&event_url)
        .bearer_auth(&customer)
        .json(&json!({ "price": "50" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    let response = client
        .delete(&event_url)
        .bearer_auth(&customer)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Owner can
    let response = client
        .patch(&event_url)
        .bearer_auth(&organiser)
        .json(&json!({ "price": "50" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 202);

    let response = client
        .delete(&event_url)
        .bearer_auth(&organiser)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_favorites_are_owner_scoped() {
    let client = Client::new();

    let organiser_email = unique_email("organiser");
    let owner_email = unique_email("owner");
    let stranger_email = unique_email("stranger");
    sign_up_organiser(&client, &organiser_email).await;
    sign_up_customer(&client, &owner_email).await;
    sign_up_customer(&client, &stranger_email).await;
    let organiser = sign_in(&client, "organiser", &organiser_email).await;
    let owner = sign_in(&client, "customer", &owner_email).await;
    let stranger = sign_in(&client, "customer", &stranger_email).await;

    let event_id = create_event(&client, &organiser).await;

    let response = client
        .post(format!("{}/favorites", BASE_URL))
        .bearer_auth(&owner)
        .json(&json!({ "event_id": event_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let favorite_url = format!("{}/favorites/{}", BASE_URL, body["id"].as_str().expect("No id"));

    let response = client
        .get(&favorite_url)
        .bearer_auth(&stranger)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .get(&favorite_url)
        .bearer_auth(&owner)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .delete(&favorite_url)
        .bearer_auth(&owner)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_likes_for_unliked_event_are_not_found() {
    let client = Client::new();

    let organiser_email = unique_email("organiser");
    sign_up_organiser(&client, &organiser_email).await;
    let organiser = sign_in(&client, "organiser", &organiser_email).await;
    let event_id = create_event(&client, &organiser).await;

    let response = client
        .get(format!("{}/likes/event/{}", BASE_URL, event_id))
        .bearer_auth(&organiser)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .post(format!("{}/likes/event", BASE_URL))
        .bearer_auth(&organiser)
        .json(&json!({ "event_id": event_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/likes/event/{}", BASE_URL, event_id))
        .bearer_auth(&organiser)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Likes found");
    assert_eq!(body["likes"].as_array().map(Vec::len), Some(1));
}
