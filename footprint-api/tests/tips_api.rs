use footprint_api::{models::SustainabilityTip, orm::testing::test_rocket};
use rocket::{http::Status, local::asynchronous::Client};
use serde_json::Value;

#[rocket::async_test]
async fn test_seed_tips_is_idempotent() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.post("/api/1/Tips/Seed").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["created"], 10);
    assert_eq!(body["total"], 10);

    let response = client.post("/api/1/Tips/Seed").dispatch().await;
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["created"], 0);
    assert_eq!(body["total"], 10);
}

#[rocket::async_test]
async fn test_list_tips_by_category() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.get("/api/1/Tips").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let tips: Vec<SustainabilityTip> = response.into_json().await.expect("valid JSON");
    assert!(tips.is_empty());

    client.post("/api/1/Tips/Seed").dispatch().await;

    let response = client.get("/api/1/Tips").dispatch().await;
    let tips: Vec<SustainabilityTip> = response.into_json().await.expect("valid JSON");
    assert_eq!(tips.len(), 10);
    assert!(tips.iter().all(|t| t.indian_context));

    let response = client.get("/api/1/Tips?category=transport").dispatch().await;
    let tips: Vec<SustainabilityTip> = response.into_json().await.expect("valid JSON");
    let titles: Vec<&str> = tips.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Opt for Public Transport", "Cycle for Short Distances"]);

    let response = client.get("/api/1/Tips?category=waste").dispatch().await;
    let tips: Vec<SustainabilityTip> = response.into_json().await.expect("valid JSON");
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0].impact_kg_co2, "25".parse::<rust_decimal::Decimal>().unwrap());
}

#[rocket::async_test]
async fn test_unknown_tip_category() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.get("/api/1/Tips?category=space").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["error"], "Unknown tip category 'space'");
}
