use footprint_api::{models::Household, orm::testing::test_rocket};
use rocket::{
    http::{ContentType, Status},
    local::asynchronous::Client,
};
use serde_json::{Value, json};

async fn create_household(client: &Client, name: &str, family_size: i32) -> Household {
    let response = client
        .post("/api/1/Households")
        .header(ContentType::JSON)
        .body(
            json!({
                "name": name,
                "address": "12 MG Road",
                "city": "Pune",
                "state": "Maharashtra",
                "pincode": "411001",
                "family_size": family_size
            })
            .to_string(),
        )
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Created);
    response.into_json().await.expect("valid household JSON")
}

#[rocket::async_test]
async fn test_create_and_get_household() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let created = create_household(&client, "Sharma Family", 4).await;
    assert_eq!(created.name, "Sharma Family");
    assert_eq!(created.family_size, 4);

    let response = client.get(format!("/api/1/Households/{}", created.id)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let fetched: Household = response.into_json().await.expect("valid household JSON");
    assert_eq!(fetched, created);
}

#[rocket::async_test]
async fn test_list_households() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");
    create_household(&client, "First", 2).await;
    create_household(&client, "Second", 3).await;

    let response = client.get("/api/1/Households").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let households: Vec<Household> = response.into_json().await.expect("valid JSON");
    assert_eq!(households.len(), 2);
    assert_eq!(households[1].name, "Second");
}

#[rocket::async_test]
async fn test_missing_household_requires_setup() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.get("/api/1/Households/999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["setup_required"], json!(true));
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[rocket::async_test]
async fn test_invalid_household_fields_rejected() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    for (pincode, family_size) in [("4110", 4), ("411001", 0), ("411001", 21)] {
        let response = client
            .post("/api/1/Households")
            .json(&json!({
                "name": "Bad",
                "city": "Pune",
                "state": "Maharashtra",
                "pincode": pincode,
                "family_size": family_size
            }))
            .dispatch()
            .await;
        assert_eq!(
            response.status(),
            Status::UnprocessableEntity,
            "pincode {} family size {}",
            pincode,
            family_size
        );
    }

    let response = client.get("/api/1/Households").dispatch().await;
    let households: Vec<Household> = response.into_json().await.expect("valid JSON");
    assert!(households.is_empty());
}

#[rocket::async_test]
async fn test_malformed_body_is_unprocessable() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client
        .post("/api/1/Households")
        .json(&json!({ "name": "No size" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["status"], json!(422));
}

#[rocket::async_test]
async fn test_update_household() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");
    let household = create_household(&client, "Iyer", 3).await;

    let response = client
        .put(format!("/api/1/Households/{}", household.id))
        .json(&json!({ "family_size": 5, "city": "Chennai" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let updated: Household = response.into_json().await.expect("valid JSON");
    assert_eq!(updated.family_size, 5);
    assert_eq!(updated.city, "Chennai");
    assert_eq!(updated.name, "Iyer");

    let response = client
        .put(format!("/api/1/Households/{}", household.id))
        .json(&json!({ "pincode": "abc" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let response = client
        .put("/api/1/Households/4242")
        .json(&json!({ "family_size": 2 }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_delete_household_cascades() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");
    let household = create_household(&client, "Gone", 2).await;

    let response = client
        .post(format!("/api/1/Households/{}/BulkEntry", household.id))
        .json(&json!({ "month": "2025-03", "electricity_kwh": 100, "rice_kg": 10 }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.delete(format!("/api/1/Households/{}", household.id)).dispatch().await;
    assert_eq!(response.status(), Status::NoContent);

    let response = client.get(format!("/api/1/Households/{}", household.id)).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client.delete(format!("/api/1/Households/{}", household.id)).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    // A new household must not inherit the deleted one's data.
    let fresh = create_household(&client, "Fresh", 2).await;
    let response = client.get(format!("/api/1/Households/{}/Footprints", fresh.id)).dispatch().await;
    let footprints: Vec<Value> = response.into_json().await.expect("valid JSON");
    assert!(footprints.is_empty());
}

#[rocket::async_test]
async fn test_status_endpoint() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.get("/api/1/status").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["households"], 0);
    assert_eq!(body["tips"], 0);

    client
        .post("/api/1/Households")
        .json(&json!({
            "name": "Status Check",
            "city": "Pune",
            "state": "Maharashtra",
            "pincode": "411001",
            "family_size": 2
        }))
        .dispatch()
        .await;
    let response = client.get("/api/1/status").dispatch().await;
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["households"], 1);
}

#[rocket::async_test]
async fn test_unknown_route_returns_json_404() {
    let client = Client::tracked(test_rocket()).await.expect("valid rocket instance");

    let response = client.get("/api/1/Nowhere").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["path"], "/api/1/Nowhere");
}
