//! HTTP API 集成测试
//!
//! 使用内存存储 + tower oneshot, 不绑定端口

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use sufra_server::{Config, MemStore, ServerState, build_app};

const ADMIN_EMAIL: &str = "admin@test.local";
const ADMIN_PASSWORD: &str = "hunter-42";

fn test_app() -> Router {
    let config = Config::for_tests(ADMIN_EMAIL, ADMIN_PASSWORD);
    let state = ServerState::with_store(config, Arc::new(MemStore::new()))
        .expect("state should build");
    build_app(state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    request(app, method, uri, body, None).await
}

// ========== 健康检查 ==========

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ========== 中间件 ==========

async fn origin_header_for(app: &Router) -> Option<String> {
    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

#[tokio::test]
async fn cors_is_permissive_only_outside_production() {
    let dev = test_app();
    assert_eq!(origin_header_for(&dev).await.as_deref(), Some("*"));

    let mut config = Config::for_tests(ADMIN_EMAIL, ADMIN_PASSWORD);
    config.environment = "production".into();
    let prod = build_app(
        ServerState::with_store(config, Arc::new(MemStore::new())).expect("state should build"),
    );
    assert_eq!(origin_header_for(&prod).await, None);
}

#[tokio::test]
async fn middleware_stack_serves_parallel_requests() {
    let app = test_app();
    let (health, categories, offers) = tokio::join!(
        send(&app, "GET", "/api/health", None),
        send(&app, "GET", "/api/categories", None),
        send(&app, "GET", "/api/special-offers", None),
    );
    assert_eq!(health.0, StatusCode::OK);
    assert_eq!(categories.0, StatusCode::OK);
    assert_eq!(offers.0, StatusCode::OK);
}

// ========== 分类 ==========

#[tokio::test]
async fn category_create_applies_defaults() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": "Pizza", "icon": "pizza" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Pizza");
    assert_eq!(body["isActive"], true);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn category_crud_cycle() {
    let app = test_app();
    let (_, created) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": "Burgers", "icon": "burger" })),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/categories/{id}"),
        Some(json!({ "name": "Smash Burgers" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Smash Burgers");
    // 未提交的字段保持原值
    assert_eq!(updated["icon"], "burger");

    let (status, _) = send(&app, "DELETE", &format!("/api/categories/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/categories/{id}"),
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");

    let (status, _) = send(&app, "DELETE", &format!("/api/categories/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_create_rejects_missing_name() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "icon": "question" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some());
}

// ========== 餐厅 ==========

async fn create_restaurant(app: &Router, name: &str, category_id: Option<&str>) -> Value {
    let mut payload = json!({
        "name": name,
        "image": "https://img.example/r.jpg",
        "deliveryTime": "25-35 min",
        "minimumOrder": 1500,
        "deliveryFee": 299,
    });
    if let Some(category_id) = category_id {
        payload["categoryId"] = json!(category_id);
    }
    let (status, body) = send(app, "POST", "/api/restaurants", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn restaurant_create_applies_defaults() {
    let app = test_app();
    let body = create_restaurant(&app, "Beirut Bites", None).await;
    assert_eq!(body["rating"], "0.0");
    assert_eq!(body["reviewCount"], 0);
    assert_eq!(body["isOpen"], true);
    assert!(body["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn restaurant_get_by_id_and_missing() {
    let app = test_app();
    let created = create_restaurant(&app, "Falafel House", None).await;
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/api/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Falafel House");

    let (status, body) = send(&app, "GET", "/api/restaurants/no-such-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Restaurant not found");
}

#[tokio::test]
async fn restaurant_filter_by_category_is_exact() {
    let app = test_app();
    let (_, pizza) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": "Pizza", "icon": "pizza" })),
    )
    .await;
    let (_, sushi) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({ "name": "Sushi", "icon": "sushi" })),
    )
    .await;
    let pizza_id = pizza["id"].as_str().unwrap();
    let sushi_id = sushi["id"].as_str().unwrap();

    create_restaurant(&app, "Napoli", Some(pizza_id)).await;
    create_restaurant(&app, "Vesuvio", Some(pizza_id)).await;
    create_restaurant(&app, "Tokyo Bay", Some(sushi_id)).await;
    create_restaurant(&app, "Orphan Diner", None).await;

    let (status, filtered) = send(
        &app,
        "GET",
        &format!("/api/restaurants?categoryId={pizza_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = filtered
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Napoli"));
    assert!(names.contains(&"Vesuvio"));

    let (_, all) = send(&app, "GET", "/api/restaurants", None).await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

// ========== 菜品 ==========

#[tokio::test]
async fn menu_listing_is_scoped_to_restaurant() {
    let app = test_app();
    let first = create_restaurant(&app, "Napoli", None).await;
    let second = create_restaurant(&app, "Tokyo Bay", None).await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    for (name, restaurant_id) in [
        ("Margherita", first_id),
        ("Diavola", first_id),
        ("Salmon Roll", second_id),
    ] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/menu-items",
            Some(json!({
                "name": name,
                "price": 1250,
                "image": "https://img.example/dish.jpg",
                "category": "Mains",
                "restaurantId": restaurant_id,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["isAvailable"], true);
        assert_eq!(body["isSpecialOffer"], false);
    }

    let (status, menu) = send(&app, "GET", &format!("/api/restaurants/{first_id}/menu"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu.as_array().unwrap().len(), 2);

    // 未知餐厅返回空菜单而非 404
    let (status, empty) = send(&app, "GET", "/api/restaurants/no-such-id/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn menu_item_update_and_delete() {
    let app = test_app();
    let (_, item) = send(
        &app,
        "POST",
        "/api/menu-items",
        Some(json!({
            "name": "Hummus",
            "price": 600,
            "image": "https://img.example/hummus.jpg",
            "category": "Starters",
        })),
    )
    .await;
    let id = item["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/menu-items/{id}"),
        Some(json!({ "price": 700, "isAvailable": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 700);
    assert_eq!(updated["isAvailable"], false);

    let (status, _) = send(&app, "DELETE", &format!("/api/menu-items/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/api/menu-items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========== 订单 ==========

fn order_payload(restaurant_id: &str) -> Value {
    json!({
        "customerName": "Lina K",
        "customerPhone": "+961 70 123 456",
        "customerEmail": "lina@example.com",
        "deliveryAddress": "12 Hamra Street",
        "paymentMethod": "cash",
        "items": "[{\"name\":\"Margherita\",\"qty\":2}]",
        "subtotal": 2500,
        "deliveryFee": 299,
        "total": 2799,
        "restaurantId": restaurant_id,
    })
}

#[tokio::test]
async fn order_create_applies_defaults() {
    let app = test_app();
    let (status, order) = send(&app, "POST", "/api/orders", Some(order_payload("r1"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["estimatedTime"], "30-45 minutes");
    assert_eq!(order["createdAt"], order["updatedAt"]);
}

#[tokio::test]
async fn order_update_bumps_updated_at() {
    let app = test_app();
    let (_, order) = send(&app, "POST", "/api/orders", Some(order_payload("r1"))).await;
    let id = order["id"].as_str().unwrap();
    let created_at = order["createdAt"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/orders/{id}"),
        Some(json!({ "status": "preparing" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "preparing");
    let updated_at = updated["updatedAt"].as_str().unwrap();
    assert!(updated_at >= created_at.as_str());
}

#[tokio::test]
async fn order_filter_by_restaurant() {
    let app = test_app();
    send(&app, "POST", "/api/orders", Some(order_payload("r1"))).await;
    send(&app, "POST", "/api/orders", Some(order_payload("r1"))).await;
    send(&app, "POST", "/api/orders", Some(order_payload("r2"))).await;

    let (status, filtered) = send(&app, "GET", "/api/orders?restaurantId=r1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered.as_array().unwrap().len(), 2);

    let (_, all) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn orders_cannot_be_deleted() {
    let app = test_app();
    let (_, order) = send(&app, "POST", "/api/orders", Some(order_payload("r1"))).await;
    let id = order["id"].as_str().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, fetched) = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn order_create_rejects_bad_email() {
    let app = test_app();
    let mut payload = order_payload("r1");
    payload["customerEmail"] = json!("not-an-email");
    let (status, _) = send(&app, "POST", "/api/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ========== 配送员 ==========

async fn create_driver(app: &Router, name: &str, phone: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/drivers",
        Some(json!({
            "name": name,
            "phone": phone,
            "password": "wheels-99",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn driver_responses_never_expose_password() {
    let app = test_app();
    let created = create_driver(&app, "Sami", "70111222").await;
    assert!(created.get("password").is_none());
    assert!(created.get("passwordHash").is_none());
    assert_eq!(created["isAvailable"], true);
    assert_eq!(created["isActive"], true);
    assert_eq!(created["earnings"], 0);

    let id = created["id"].as_str().unwrap();
    let (_, fetched) = send(&app, "GET", &format!("/api/drivers/{id}"), None).await;
    assert!(fetched.get("passwordHash").is_none());

    let (_, updated) = send(
        &app,
        "PUT",
        &format!("/api/drivers/{id}"),
        Some(json!({ "password": "new-wheels" })),
    )
    .await;
    assert!(updated.get("passwordHash").is_none());
}

#[tokio::test]
async fn driver_available_filter_requires_active() {
    let app = test_app();
    let ready = create_driver(&app, "Ready", "70000001").await;
    let parked = create_driver(&app, "Parked", "70000002").await;
    let retired = create_driver(&app, "Retired", "70000003").await;

    for (driver, patch) in [
        (&ready, json!({ "isAvailable": true })),
        (&parked, json!({ "isAvailable": false })),
        (&retired, json!({ "isAvailable": true, "isActive": false })),
    ] {
        let id = driver["id"].as_str().unwrap();
        let (status, _) = send(&app, "PUT", &format!("/api/drivers/{id}"), Some(patch)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, available) = send(&app, "GET", "/api/drivers?available=true", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = available
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ready"]);

    let (_, all) = send(&app, "GET", "/api/drivers", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn driver_delete_then_fetch_is_absent() {
    let app = test_app();
    let created = create_driver(&app, "Sami", "70111222").await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/api/drivers/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", &format!("/api/drivers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========== 促销活动 ==========

#[tokio::test]
async fn special_offer_active_filter() {
    let app = test_app();
    let (status, running) = send(
        &app,
        "POST",
        "/api/special-offers",
        Some(json!({
            "title": "Lunch Deal",
            "description": "20% off mains",
            "image": "https://img.example/lunch.jpg",
            "discountPercent": 20,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(running["isActive"], true);
    assert_eq!(running["minimumOrder"], 0);

    let (_, ended) = send(
        &app,
        "POST",
        "/api/special-offers",
        Some(json!({
            "title": "Expired Deal",
            "description": "last season",
            "image": "https://img.example/old.jpg",
            "isActive": false,
        })),
    )
    .await;
    let ended_id = ended["id"].as_str().unwrap();

    let (status, active) = send(&app, "GET", "/api/special-offers?active=true", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = active
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Lunch Deal"]);

    let (status, _) = send(&app, "DELETE", &format!("/api/special-offers/{ended_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ========== 认证 ==========

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/admin/login",
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

#[tokio::test]
async fn admin_login_verify_logout_cycle() {
    let app = test_app();

    let (status, body) = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["userType"], "admin");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, verified) =
        request(&app, "GET", "/api/admin/verify", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["valid"], true);
    assert_eq!(verified["userType"], "admin");

    let (status, out) = send(
        &app,
        "POST",
        "/api/admin/logout",
        Some(json!({ "token": token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["success"], true);

    // 注销后令牌立即失效
    let (status, _) = request(&app, "GET", "/api/admin/verify", None, Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 重复注销仍然成功
    let (status, out) = send(
        &app,
        "POST",
        "/api/admin/logout",
        Some(json!({ "token": token })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["success"], true);
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let app = test_app();

    for (email, password) in [
        (ADMIN_EMAIL, "wrong-password"),
        ("nobody@test.local", ADMIN_PASSWORD),
        ("70999999", "wheels-99"),
    ] {
        let (status, body) = login(&app, email, password).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid email or password");
    }
}

#[tokio::test]
async fn login_rejects_missing_fields() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "email": ADMIN_EMAIL })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/admin/login", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn driver_can_login_with_phone() {
    let app = test_app();
    let driver = create_driver(&app, "Sami", "70111222").await;

    let (status, body) = login(&app, "70111222", "wheels-99").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userType"], "driver");
    assert_eq!(body["driverId"], driver["id"]);

    let token = body["token"].as_str().unwrap();
    let (status, verified) = request(&app, "GET", "/api/admin/verify", None, Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["userType"], "driver");
}

#[tokio::test]
async fn verify_requires_bearer_header() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/api/admin/verify", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(&app, "GET", "/api/admin/verify", None, Some("bogus-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
