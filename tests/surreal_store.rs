//! 嵌入式 SurrealDB 存储层集成测试
//!
//! 每个测试使用独立的临时 RocksDB 目录

use chrono::{Duration, Utc};
use tempfile::tempdir;

use sufra_server::SurrealStore;
use sufra_server::db::models::{
    CategoryCreate, CategoryUpdate, DriverCreate, DriverUpdate, MenuItemCreate, OrderCreate,
    OrderUpdate, RestaurantCreate, SessionCreate, SessionRole,
};
use sufra_server::db::repository::{
    CategoryStore, DriverStore, MenuItemStore, OrderStore, RestaurantStore, SessionStore,
};

async fn open_store(dir: &tempfile::TempDir) -> SurrealStore {
    SurrealStore::open(dir.path())
        .await
        .expect("embedded db should open")
}

fn category(name: &str) -> CategoryCreate {
    CategoryCreate {
        name: name.into(),
        icon: "utensils".into(),
        is_active: None,
    }
}

fn restaurant(name: &str, category_id: Option<String>) -> RestaurantCreate {
    RestaurantCreate {
        name: name.into(),
        description: None,
        image: "https://img.example/r.jpg".into(),
        rating: None,
        review_count: None,
        delivery_time: "25-35 min".into(),
        is_open: None,
        minimum_order: Some(1000),
        delivery_fee: Some(250),
        category_id,
    }
}

fn order(restaurant_id: &str) -> OrderCreate {
    OrderCreate {
        customer_name: "Lina K".into(),
        customer_phone: "+961 70 123 456".into(),
        customer_email: None,
        delivery_address: "12 Hamra Street".into(),
        notes: None,
        payment_method: "cash".into(),
        status: None,
        items: r#"[{"name":"Margherita","qty":2}]"#.into(),
        subtotal: 2500,
        delivery_fee: 299,
        total: 2799,
        estimated_time: None,
        restaurant_id: Some(restaurant_id.into()),
        driver_id: None,
    }
}

fn driver(name: &str, phone: &str) -> DriverCreate {
    DriverCreate {
        name: name.into(),
        phone: phone.into(),
        password: "wheels-99".into(),
        is_available: None,
        is_active: None,
        current_location: None,
        earnings: None,
    }
}

#[tokio::test]
async fn category_crud_round_trip() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir).await;

    let created = store.create_category(category("Pizza")).await.unwrap();
    assert!(created.is_active);
    let id = created.id.as_ref().unwrap().to_string();

    let fetched = store.get_category(&id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Pizza");

    let updated = store
        .update_category(
            &id,
            CategoryUpdate {
                name: Some("Neapolitan Pizza".into()),
                icon: None,
                is_active: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Neapolitan Pizza");
    assert_eq!(updated.icon, "utensils");

    assert!(store.delete_category(&id).await.unwrap());
    assert!(store.get_category(&id).await.unwrap().is_none());
    // second delete reports absence
    assert!(!store.delete_category(&id).await.unwrap());
}

#[tokio::test]
async fn update_unknown_id_leaves_store_untouched() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir).await;

    let result = store
        .update_category(
            "categories:doesnotexist",
            CategoryUpdate {
                name: Some("Ghost".into()),
                icon: None,
                is_active: None,
            },
        )
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(store.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn restaurants_filter_by_category() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir).await;

    let pizza = store.create_category(category("Pizza")).await.unwrap();
    let pizza_id = pizza.id.as_ref().unwrap().to_string();

    store
        .create_restaurant(restaurant("Napoli", Some(pizza_id.clone())))
        .await
        .unwrap();
    store
        .create_restaurant(restaurant("Vesuvio", Some(pizza_id.clone())))
        .await
        .unwrap();
    store
        .create_restaurant(restaurant("Orphan Diner", None))
        .await
        .unwrap();

    let filtered = store.restaurants_by_category(&pizza_id).await.unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.category_id.as_deref() == Some(pizza_id.as_str())));

    let all = store.list_restaurants().await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn menu_items_scoped_by_restaurant() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir).await;

    let first = store
        .create_restaurant(restaurant("Napoli", None))
        .await
        .unwrap();
    let first_id = first.id.as_ref().unwrap().to_string();

    store
        .create_menu_item(MenuItemCreate {
            name: "Margherita".into(),
            description: None,
            price: 1250,
            image: "https://img.example/m.jpg".into(),
            category: "Mains".into(),
            is_available: None,
            is_special_offer: None,
            original_price: None,
            restaurant_id: Some(first_id.clone()),
        })
        .await
        .unwrap();
    store
        .create_menu_item(MenuItemCreate {
            name: "Stray Dish".into(),
            description: None,
            price: 900,
            image: "https://img.example/s.jpg".into(),
            category: "Mains".into(),
            is_available: None,
            is_special_offer: None,
            original_price: None,
            restaurant_id: None,
        })
        .await
        .unwrap();

    let menu = store.menu_items_by_restaurant(&first_id).await.unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].name, "Margherita");

    let empty = store.menu_items_by_restaurant("restaurants:none").await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn order_update_refreshes_timestamp() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir).await;

    let created = store.create_order(order("r1")).await.unwrap();
    assert_eq!(created.status, "pending");
    let id = created.id.as_ref().unwrap().to_string();
    let created_at = created.created_at.unwrap();

    let updated = store
        .update_order(
            &id,
            OrderUpdate {
                status: Some("preparing".into()),
                ..OrderUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "preparing");
    assert!(updated.updated_at.unwrap() >= created_at);
    // 未提交的字段保持原值
    assert_eq!(updated.customer_name, "Lina K");
}

#[tokio::test]
async fn drivers_store_hashed_passwords_and_filter() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir).await;

    let ready = store.create_driver(driver("Ready", "70000001")).await.unwrap();
    assert_ne!(ready.password_hash, "wheels-99");
    assert!(ready.verify_password("wheels-99"));
    assert!(!ready.verify_password("not-it"));

    let retired = store.create_driver(driver("Retired", "70000002")).await.unwrap();
    let retired_id = retired.id.as_ref().unwrap().to_string();
    store
        .update_driver(
            &retired_id,
            DriverUpdate {
                is_active: Some(false),
                ..DriverUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    let available = store.available_drivers().await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name, "Ready");

    let by_phone = store.get_driver_by_phone("70000001").await.unwrap().unwrap();
    assert_eq!(by_phone.name, "Ready");
    assert!(store.get_driver_by_phone("70999999").await.unwrap().is_none());
}

#[tokio::test]
async fn session_lifecycle_is_idempotent_on_delete() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir).await;

    let now = Utc::now();
    let session = store
        .create_session(SessionCreate {
            admin_id: "admin-main".into(),
            token: "token-abc".into(),
            user_type: SessionRole::Admin,
            expires_at: now + Duration::hours(24),
        })
        .await
        .unwrap();
    assert!(!session.is_expired(now));

    let found = store.get_session_by_token("token-abc").await.unwrap().unwrap();
    assert_eq!(found.admin_id, "admin-main");

    assert!(store.delete_session_by_token("token-abc").await.unwrap());
    assert!(store.get_session_by_token("token-abc").await.unwrap().is_none());
    // idempotent second delete
    assert!(!store.delete_session_by_token("token-abc").await.unwrap());
}
