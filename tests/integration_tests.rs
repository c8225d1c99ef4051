// Integration tests for Slope Buddy

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use slope_buddy::config::Settings;
use slope_buddy::core::{Matcher, SearchContext};
use slope_buddy::models::{
    CandidateKind, Coordinate, Exclusions, RideEvent, RideType, RiderProfile, SearchFilters,
    SkillLevel,
};
use slope_buddy::routes::{configure_routes, AppState};

fn create_rider(user_id: i64, ride_type: RideType, level: SkillLevel, lat: f64, lon: f64) -> RiderProfile {
    RiderProfile {
        user_id,
        ride_type: Some(ride_type),
        skill_level: Some(level),
        city: Some("Москва".to_string()),
        location: Some(Coordinate::new(lat, lon)),
        age: Some(27),
        about: Some("Катаюсь по выходным".to_string()),
        photo_ids: vec!["photo".to_string()],
    }
}

fn create_event(id: i64, creator_id: i64) -> RideEvent {
    RideEvent {
        id,
        creator_id,
        resort_id: 1,
        event_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        skill_level: Some(SkillLevel::Intermediate),
        group_link: "https://t.me/+group".to_string(),
        description: None,
        photo_id: None,
        is_active: true,
    }
}

fn test_state() -> AppState {
    AppState::from_settings(&Settings::default()).unwrap()
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_integration_end_to_end_ranking() {
    let matcher = Matcher::with_default_weights();
    let viewer = create_rider(1, RideType::Snowboard, SkillLevel::Intermediate, 55.75, 37.61);

    let profiles = vec![
        create_rider(2, RideType::Ski, SkillLevel::Beginner, 43.65, 40.29),          // far, other sport
        create_rider(3, RideType::Snowboard, SkillLevel::Intermediate, 55.76, 37.60), // near twin
        create_rider(4, RideType::Snowboard, SkillLevel::Advanced, 55.70, 37.55),     // liked already
        create_rider(1, RideType::Snowboard, SkillLevel::Intermediate, 55.75, 37.61), // self
        create_rider(5, RideType::Snowboard, SkillLevel::Intermediate, 56.06, 37.39), // blocked
    ];
    let events = vec![create_event(10, 7), create_event(11, 1)];

    let exclusions = Exclusions {
        liked: [4].into_iter().collect(),
        blocked: [5].into_iter().collect(),
    };
    let filters = SearchFilters::default();
    let context = SearchContext {
        viewer: &viewer,
        viewer_location: viewer.location,
        exclusions: &exclusions,
        filters: &filters,
    };

    let result = matcher.rank(context, &profiles, &events);

    let kinds: Vec<CandidateKind> = result.candidates.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CandidateKind::Profile { user_id: 3 },
            CandidateKind::Profile { user_id: 2 },
            CandidateKind::Event { event_id: 10 },
        ]
    );
    assert_eq!(result.candidates[0].score, 100);
    // Profile and event tie at 50; profiles come first
    assert_eq!(result.candidates[1].score, 50);
    assert_eq!(result.candidates[2].score, 50);
    assert!(result.candidates.windows(2).all(|w| w[0].score >= w[1].score));
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_snowboard_endpoint() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/equipment/snowboard")
        .set_json(json!({
            "heightCm": 175,
            "weightKg": 75,
            "gender": "м",
            "shoeSize": 42,
            "style": "Универсал"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["minLength"], 155);
    assert_eq!(body["maxLength"], 165);
    assert_eq!(body["wide"], false);
}

#[actix_web::test]
async fn test_snowboard_endpoint_rejects_out_of_range_weight() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/equipment/snowboard")
        .set_json(json!({
            "heightCm": 175,
            "weightKg": 250,
            "shoeSize": 42
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 400);
}

#[actix_web::test]
async fn test_ski_endpoint() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/equipment/ski")
        .set_json(json!({
            "heightCm": 175,
            "weightKg": 75,
            "level": "Средний",
            "style": "Трасса"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["minLength"], 155);
    assert_eq!(body["maxLength"], 165);
}

#[actix_web::test]
async fn test_nearby_resorts_endpoint() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/resorts/nearby")
        .set_json(json!({ "latitude": 43.60, "longitude": 39.73, "limit": 3 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let resorts = body.as_array().unwrap();
    assert_eq!(resorts.len(), 3);
    assert!(resorts[0]["distanceKm"].as_f64().unwrap() <= resorts[1]["distanceKm"].as_f64().unwrap());
    assert!(resorts[0]["region"].as_str().unwrap().starts_with("Сочи"));
}

#[actix_web::test]
async fn test_get_resort_endpoint() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/resorts/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "КАНТ (Нагорная)");

    let req = test::TestRequest::get().uri("/api/v1/resorts/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_weather_disabled_returns_no_content() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/resorts/1/weather").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_weather_upstream_failure_is_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/weather")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let mut settings = Settings::default();
    settings.weather.api_key = Some("key".to_string());
    settings.weather.endpoint = format!("{}/weather", server.url());
    let app = test_app!(AppState::from_settings(&settings).unwrap());

    let req = test::TestRequest::get().uri("/api/v1/resorts/1/weather").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_regions_endpoints() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/regions").to_request();
    let regions: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(regions[0], "Москва");

    let req = test::TestRequest::get()
        .uri("/api/v1/regions/%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0/resorts")
        .to_request();
    let resorts: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resorts.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_rescue_endpoint() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/rescue")
        .set_json(json!({ "latitude": 55.75, "longitude": 37.61 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["emergencyNumber"], "112");
    let contacts = body["contacts"].as_array().unwrap();
    assert!(!contacts.is_empty());
    assert!(contacts.len() <= 8);
    assert!(contacts.iter().all(|c| c["distanceKm"].as_f64().unwrap() <= 100.0));
}

#[actix_web::test]
async fn test_rescue_endpoint_without_location() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/rescue")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 8);
    assert!(contacts.iter().all(|c| c["distanceKm"].is_null()));
}

#[actix_web::test]
async fn test_score_endpoint() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({
            "viewer": { "userId": 1, "rideType": "🏂 Сноуборд", "skillLevel": "Средний" },
            "candidate": { "userId": 2, "rideType": "snowboard", "skillLevel": "Продвинутый" }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["score"], 25);
}

#[actix_web::test]
async fn test_browsing_flow() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/browse/start")
        .set_json(json!({
            "viewer": { "userId": 1, "rideType": "snowboard", "skillLevel": "Средний", "city": "Москва" },
            "profiles": [
                { "userId": 2, "rideType": "ski" },
                { "userId": 3, "rideType": "snowboard", "skillLevel": "Средний", "city": "Москва" },
                { "userId": 4, "rideType": "snowboard" }
            ],
            "events": [],
            "likedUserIds": [],
            "blockedUserIds": [4]
        }))
        .to_request();
    let started: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(started["total"], 2);
    assert!(started["sessionId"].as_str().is_some());

    let next = || {
        test::TestRequest::post()
            .uri("/api/v1/browse/next")
            .set_json(json!({ "userId": 1 }))
            .to_request()
    };

    let first: Value = test::call_and_read_body_json(&app, next()).await;
    assert_eq!(first["candidate"]["type"], "profile");
    assert_eq!(first["candidate"]["userId"], 3);
    assert_eq!(first["candidate"]["score"], 55);
    assert_eq!(first["remaining"], 1);
    assert_eq!(first["exhausted"], false);

    let second: Value = test::call_and_read_body_json(&app, next()).await;
    assert_eq!(second["candidate"]["userId"], 2);
    assert_eq!(second["exhausted"], true);

    let done: Value = test::call_and_read_body_json(&app, next()).await;
    assert!(done["candidate"].is_null());
    assert_eq!(done["remaining"], 0);
}

#[actix_web::test]
async fn test_browse_next_without_session() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/browse/next")
        .set_json(json!({ "userId": 404 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_end_browsing() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/browse/start")
        .set_json(json!({ "viewer": { "userId": 8 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::delete().uri("/api/v1/browse/8").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/api/v1/browse/8").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
