//! In-memory store backend
//!
//! A process-scoped alternative to [`SurrealStore`](crate::db::repository::SurrealStore)
//! for development and tests: one `RwLock<HashMap>` per entity, explicit
//! construction (no hidden statics), optional seed catalog. Every operation
//! is a single map mutation under its own lock, mirroring the
//! one-atomic-row model of the persistent backend.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use surrealdb::RecordId;

use crate::auth::password::hash_password;
use crate::db::models::{
    AdminSession, Category, CategoryCreate, CategoryUpdate, Driver, DriverCreate, DriverUpdate,
    MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderCreate, OrderUpdate, Restaurant,
    RestaurantCreate, RestaurantUpdate, SessionCreate, SpecialOffer, SpecialOfferCreate,
    SpecialOfferUpdate,
};
use crate::db::repository::{
    CategoryStore, DriverStore, MenuItemStore, OrderStore, RepoError, RepoResult, RestaurantStore,
    SessionStore, SpecialOfferStore, new_record_key,
};

/// Seeded in-memory maps, keyed by full id string ("table:key")
#[derive(Debug, Default)]
pub struct MemStore {
    categories: RwLock<HashMap<String, Category>>,
    restaurants: RwLock<HashMap<String, Restaurant>>,
    menu_items: RwLock<HashMap<String, MenuItem>>,
    orders: RwLock<HashMap<String, Order>>,
    drivers: RwLock<HashMap<String, Driver>>,
    special_offers: RwLock<HashMap<String, SpecialOffer>>,
    /// Keyed by token, not id; token lookup is the only access path
    sessions: RwLock<HashMap<String, AdminSession>>,
}

/// Mint a record id for `table` with a fresh UUID key
fn mint_id(table: &str) -> RecordId {
    RecordId::from_table_key(table, new_record_key())
}

/// Normalize an incoming id to the full "table:key" map key
fn full_id(table: &str, id: &str) -> String {
    if id.contains(':') {
        id.to_string()
    } else {
        format!("{table}:{id}")
    }
}

impl MemStore {
    /// Empty store; tests construct isolated instances from this
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a small browsing catalog so a fresh dev
    /// server has something to render
    pub fn with_seed() -> Self {
        let store = Self::new();
        store.seed();
        store
    }

    fn seed(&self) {
        let seed_categories = [
            ("Restaurants", "fas fa-utensils"),
            ("Cafes", "fas fa-coffee"),
            ("Desserts", "fas fa-candy-cane"),
            ("Grocery", "fas fa-shopping-cart"),
            ("Pharmacy", "fas fa-pills"),
        ];

        let mut category_ids = Vec::new();
        {
            let mut categories = self.categories.write();
            for (name, icon) in seed_categories {
                let id = mint_id("categories");
                category_ids.push(id.to_string());
                categories.insert(
                    id.to_string(),
                    Category {
                        id: Some(id),
                        name: name.to_string(),
                        icon: icon.to_string(),
                        is_active: true,
                    },
                );
            }
        }

        let seed_restaurants = [
            (
                "Al Wazeko Kitchen",
                "Traditional dishes, slow-cooked daily",
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&h=400",
                "4.8",
                4891,
                "40-60 minutes",
                true,
                25,
                5,
                category_ids[0].clone(),
            ),
            (
                "Sham Sweets",
                "Levantine desserts and pastries",
                "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=400",
                "4.6",
                2341,
                "30-45 minutes",
                true,
                15,
                3,
                category_ids[2].clone(),
            ),
            (
                "Uruba Coffee House",
                "Classic coffee house, opens early",
                "https://images.unsplash.com/photo-1442512595331-e89e73853f31?w=800&h=400",
                "4.5",
                1876,
                "opens at 8:00",
                false,
                20,
                4,
                category_ids[1].clone(),
            ),
        ];

        let mut restaurant_ids = Vec::new();
        {
            let mut restaurants = self.restaurants.write();
            for (name, desc, image, rating, reviews, time, open, min, fee, category) in
                seed_restaurants
            {
                let id = mint_id("restaurants");
                restaurant_ids.push(id.to_string());
                restaurants.insert(
                    id.to_string(),
                    Restaurant {
                        id: Some(id),
                        name: name.to_string(),
                        description: Some(desc.to_string()),
                        image: image.to_string(),
                        rating: rating.to_string(),
                        review_count: reviews,
                        delivery_time: time.to_string(),
                        is_open: open,
                        minimum_order: min,
                        delivery_fee: fee,
                        category_id: Some(category),
                        created_at: Some(chrono::Utc::now()),
                    },
                );
            }
        }

        let seed_menu = [
            ("Areeka with cream and honey", 55, "desserts", restaurant_ids[0].clone()),
            ("Fahsa in a stone pot", 70, "mains", restaurant_ids[0].clone()),
            ("Baklava plate", 35, "desserts", restaurant_ids[1].clone()),
        ];

        {
            let mut menu_items = self.menu_items.write();
            for (name, price, label, restaurant) in seed_menu {
                let id = mint_id("menu_items");
                menu_items.insert(
                    id.to_string(),
                    MenuItem {
                        id: Some(id),
                        name: name.to_string(),
                        description: None,
                        price,
                        image: "https://images.unsplash.com/photo-1551024506-0bccd828d307?w=200&h=200"
                            .to_string(),
                        category: label.to_string(),
                        is_available: true,
                        is_special_offer: false,
                        original_price: None,
                        restaurant_id: Some(restaurant),
                    },
                );
            }
        }

        let offer_id = mint_id("special_offers");
        self.special_offers.write().insert(
            offer_id.to_string(),
            SpecialOffer {
                id: Some(offer_id),
                title: "Free delivery over 50".to_string(),
                description: "Delivery fee waived on qualifying orders this week".to_string(),
                image: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800&h=400"
                    .to_string(),
                discount_percent: None,
                discount_amount: Some(5),
                minimum_order: 50,
                is_active: true,
                valid_until: None,
                created_at: Some(chrono::Utc::now()),
            },
        );
    }
}

#[async_trait]
impl CategoryStore for MemStore {
    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.read().values().cloned().collect())
    }

    async fn get_category(&self, id: &str) -> RepoResult<Option<Category>> {
        Ok(self.categories.read().get(&full_id("categories", id)).cloned())
    }

    async fn create_category(&self, data: CategoryCreate) -> RepoResult<Category> {
        let mut category = Category::from_create(data);
        let id = mint_id("categories");
        category.id = Some(id.clone());
        self.categories.write().insert(id.to_string(), category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: &str,
        data: CategoryUpdate,
    ) -> RepoResult<Option<Category>> {
        let mut categories = self.categories.write();
        let Some(category) = categories.get_mut(&full_id("categories", id)) else {
            return Ok(None);
        };
        if let Some(name) = data.name {
            category.name = name;
        }
        if let Some(icon) = data.icon {
            category.icon = icon;
        }
        if let Some(is_active) = data.is_active {
            category.is_active = is_active;
        }
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, id: &str) -> RepoResult<bool> {
        Ok(self.categories.write().remove(&full_id("categories", id)).is_some())
    }
}

#[async_trait]
impl RestaurantStore for MemStore {
    async fn list_restaurants(&self) -> RepoResult<Vec<Restaurant>> {
        Ok(self.restaurants.read().values().cloned().collect())
    }

    async fn restaurants_by_category(&self, category_id: &str) -> RepoResult<Vec<Restaurant>> {
        Ok(self
            .restaurants
            .read()
            .values()
            .filter(|r| r.category_id.as_deref() == Some(category_id))
            .cloned()
            .collect())
    }

    async fn get_restaurant(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        Ok(self.restaurants.read().get(&full_id("restaurants", id)).cloned())
    }

    async fn create_restaurant(&self, data: RestaurantCreate) -> RepoResult<Restaurant> {
        let mut restaurant = Restaurant::from_create(data);
        let id = mint_id("restaurants");
        restaurant.id = Some(id.clone());
        self.restaurants.write().insert(id.to_string(), restaurant.clone());
        Ok(restaurant)
    }

    async fn update_restaurant(
        &self,
        id: &str,
        data: RestaurantUpdate,
    ) -> RepoResult<Option<Restaurant>> {
        let mut restaurants = self.restaurants.write();
        let Some(r) = restaurants.get_mut(&full_id("restaurants", id)) else {
            return Ok(None);
        };
        if let Some(name) = data.name {
            r.name = name;
        }
        if let Some(description) = data.description {
            r.description = Some(description);
        }
        if let Some(image) = data.image {
            r.image = image;
        }
        if let Some(rating) = data.rating {
            r.rating = rating;
        }
        if let Some(review_count) = data.review_count {
            r.review_count = review_count;
        }
        if let Some(delivery_time) = data.delivery_time {
            r.delivery_time = delivery_time;
        }
        if let Some(is_open) = data.is_open {
            r.is_open = is_open;
        }
        if let Some(minimum_order) = data.minimum_order {
            r.minimum_order = minimum_order;
        }
        if let Some(delivery_fee) = data.delivery_fee {
            r.delivery_fee = delivery_fee;
        }
        if let Some(category_id) = data.category_id {
            r.category_id = Some(category_id);
        }
        Ok(Some(r.clone()))
    }

    async fn delete_restaurant(&self, id: &str) -> RepoResult<bool> {
        Ok(self.restaurants.write().remove(&full_id("restaurants", id)).is_some())
    }
}

#[async_trait]
impl MenuItemStore for MemStore {
    async fn menu_items_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<MenuItem>> {
        Ok(self
            .menu_items
            .read()
            .values()
            .filter(|m| m.restaurant_id.as_deref() == Some(restaurant_id))
            .cloned()
            .collect())
    }

    async fn get_menu_item(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        Ok(self.menu_items.read().get(&full_id("menu_items", id)).cloned())
    }

    async fn create_menu_item(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let mut item = MenuItem::from_create(data);
        let id = mint_id("menu_items");
        item.id = Some(id.clone());
        self.menu_items.write().insert(id.to_string(), item.clone());
        Ok(item)
    }

    async fn update_menu_item(
        &self,
        id: &str,
        data: MenuItemUpdate,
    ) -> RepoResult<Option<MenuItem>> {
        let mut menu_items = self.menu_items.write();
        let Some(m) = menu_items.get_mut(&full_id("menu_items", id)) else {
            return Ok(None);
        };
        if let Some(name) = data.name {
            m.name = name;
        }
        if let Some(description) = data.description {
            m.description = Some(description);
        }
        if let Some(price) = data.price {
            m.price = price;
        }
        if let Some(image) = data.image {
            m.image = image;
        }
        if let Some(category) = data.category {
            m.category = category;
        }
        if let Some(is_available) = data.is_available {
            m.is_available = is_available;
        }
        if let Some(is_special_offer) = data.is_special_offer {
            m.is_special_offer = is_special_offer;
        }
        if let Some(original_price) = data.original_price {
            m.original_price = Some(original_price);
        }
        if let Some(restaurant_id) = data.restaurant_id {
            m.restaurant_id = Some(restaurant_id);
        }
        Ok(Some(m.clone()))
    }

    async fn delete_menu_item(&self, id: &str) -> RepoResult<bool> {
        Ok(self.menu_items.write().remove(&full_id("menu_items", id)).is_some())
    }
}

#[async_trait]
impl OrderStore for MemStore {
    async fn list_orders(&self) -> RepoResult<Vec<Order>> {
        Ok(self.orders.read().values().cloned().collect())
    }

    async fn orders_by_restaurant(&self, restaurant_id: &str) -> RepoResult<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .values()
            .filter(|o| o.restaurant_id.as_deref() == Some(restaurant_id))
            .cloned()
            .collect())
    }

    async fn get_order(&self, id: &str) -> RepoResult<Option<Order>> {
        Ok(self.orders.read().get(&full_id("orders", id)).cloned())
    }

    async fn create_order(&self, data: OrderCreate) -> RepoResult<Order> {
        let mut order = Order::from_create(data);
        let id = mint_id("orders");
        order.id = Some(id.clone());
        self.orders.write().insert(id.to_string(), order.clone());
        Ok(order)
    }

    async fn update_order(&self, id: &str, data: OrderUpdate) -> RepoResult<Option<Order>> {
        let mut orders = self.orders.write();
        let Some(o) = orders.get_mut(&full_id("orders", id)) else {
            return Ok(None);
        };
        if let Some(customer_name) = data.customer_name {
            o.customer_name = customer_name;
        }
        if let Some(customer_phone) = data.customer_phone {
            o.customer_phone = customer_phone;
        }
        if let Some(customer_email) = data.customer_email {
            o.customer_email = Some(customer_email);
        }
        if let Some(delivery_address) = data.delivery_address {
            o.delivery_address = delivery_address;
        }
        if let Some(notes) = data.notes {
            o.notes = Some(notes);
        }
        if let Some(payment_method) = data.payment_method {
            o.payment_method = payment_method;
        }
        if let Some(status) = data.status {
            o.status = status;
        }
        if let Some(items) = data.items {
            o.items = items;
        }
        if let Some(subtotal) = data.subtotal {
            o.subtotal = subtotal;
        }
        if let Some(delivery_fee) = data.delivery_fee {
            o.delivery_fee = delivery_fee;
        }
        if let Some(total) = data.total {
            o.total = total;
        }
        if let Some(estimated_time) = data.estimated_time {
            o.estimated_time = estimated_time;
        }
        if let Some(restaurant_id) = data.restaurant_id {
            o.restaurant_id = Some(restaurant_id);
        }
        if let Some(driver_id) = data.driver_id {
            o.driver_id = Some(driver_id);
        }
        o.updated_at = Some(chrono::Utc::now());
        Ok(Some(o.clone()))
    }
}

#[async_trait]
impl DriverStore for MemStore {
    async fn list_drivers(&self) -> RepoResult<Vec<Driver>> {
        Ok(self.drivers.read().values().cloned().collect())
    }

    async fn available_drivers(&self) -> RepoResult<Vec<Driver>> {
        Ok(self
            .drivers
            .read()
            .values()
            .filter(|d| d.is_available && d.is_active)
            .cloned()
            .collect())
    }

    async fn get_driver(&self, id: &str) -> RepoResult<Option<Driver>> {
        Ok(self.drivers.read().get(&full_id("drivers", id)).cloned())
    }

    async fn get_driver_by_phone(&self, phone: &str) -> RepoResult<Option<Driver>> {
        Ok(self
            .drivers
            .read()
            .values()
            .find(|d| d.phone == phone)
            .cloned())
    }

    async fn create_driver(&self, data: DriverCreate) -> RepoResult<Driver> {
        let hash = hash_password(&data.password)
            .map_err(|e| RepoError::Internal(format!("password hash: {e}")))?;
        let mut driver = Driver::from_create(data, hash);
        let id = mint_id("drivers");
        driver.id = Some(id.clone());
        self.drivers.write().insert(id.to_string(), driver.clone());
        Ok(driver)
    }

    async fn update_driver(&self, id: &str, data: DriverUpdate) -> RepoResult<Option<Driver>> {
        let password_hash = match data.password {
            Some(ref pw) => Some(
                hash_password(pw).map_err(|e| RepoError::Internal(format!("password hash: {e}")))?,
            ),
            None => None,
        };
        let mut drivers = self.drivers.write();
        let Some(d) = drivers.get_mut(&full_id("drivers", id)) else {
            return Ok(None);
        };
        if let Some(name) = data.name {
            d.name = name;
        }
        if let Some(phone) = data.phone {
            d.phone = phone;
        }
        if let Some(hash) = password_hash {
            d.password_hash = hash;
        }
        if let Some(is_available) = data.is_available {
            d.is_available = is_available;
        }
        if let Some(is_active) = data.is_active {
            d.is_active = is_active;
        }
        if let Some(current_location) = data.current_location {
            d.current_location = Some(current_location);
        }
        if let Some(earnings) = data.earnings {
            d.earnings = earnings;
        }
        Ok(Some(d.clone()))
    }

    async fn delete_driver(&self, id: &str) -> RepoResult<bool> {
        Ok(self.drivers.write().remove(&full_id("drivers", id)).is_some())
    }
}

#[async_trait]
impl SpecialOfferStore for MemStore {
    async fn list_special_offers(&self) -> RepoResult<Vec<SpecialOffer>> {
        Ok(self.special_offers.read().values().cloned().collect())
    }

    async fn active_special_offers(&self) -> RepoResult<Vec<SpecialOffer>> {
        Ok(self
            .special_offers
            .read()
            .values()
            .filter(|o| o.is_active)
            .cloned()
            .collect())
    }

    async fn create_special_offer(&self, data: SpecialOfferCreate) -> RepoResult<SpecialOffer> {
        let mut offer = SpecialOffer::from_create(data);
        let id = mint_id("special_offers");
        offer.id = Some(id.clone());
        self.special_offers.write().insert(id.to_string(), offer.clone());
        Ok(offer)
    }

    async fn update_special_offer(
        &self,
        id: &str,
        data: SpecialOfferUpdate,
    ) -> RepoResult<Option<SpecialOffer>> {
        let mut offers = self.special_offers.write();
        let Some(o) = offers.get_mut(&full_id("special_offers", id)) else {
            return Ok(None);
        };
        if let Some(title) = data.title {
            o.title = title;
        }
        if let Some(description) = data.description {
            o.description = description;
        }
        if let Some(image) = data.image {
            o.image = image;
        }
        if let Some(discount_percent) = data.discount_percent {
            o.discount_percent = Some(discount_percent);
        }
        if let Some(discount_amount) = data.discount_amount {
            o.discount_amount = Some(discount_amount);
        }
        if let Some(minimum_order) = data.minimum_order {
            o.minimum_order = minimum_order;
        }
        if let Some(is_active) = data.is_active {
            o.is_active = is_active;
        }
        if let Some(valid_until) = data.valid_until {
            o.valid_until = Some(valid_until);
        }
        Ok(Some(o.clone()))
    }

    async fn delete_special_offer(&self, id: &str) -> RepoResult<bool> {
        Ok(self
            .special_offers
            .write()
            .remove(&full_id("special_offers", id))
            .is_some())
    }
}

#[async_trait]
impl SessionStore for MemStore {
    async fn create_session(&self, data: SessionCreate) -> RepoResult<AdminSession> {
        let mut session = AdminSession::from_create(data);
        session.id = Some(mint_id("admin_sessions"));
        self.sessions
            .write()
            .insert(session.token.clone(), session.clone());
        Ok(session)
    }

    async fn get_session_by_token(&self, token: &str) -> RepoResult<Option<AdminSession>> {
        Ok(self.sessions.read().get(token).cloned())
    }

    async fn delete_session_by_token(&self, token: &str) -> RepoResult<bool> {
        Ok(self.sessions.write().remove(token).is_some())
    }
}
