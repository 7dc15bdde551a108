//! Storefront data models
//!
//! One file per entity. Each file carries the record type plus its
//! Create/Update payloads. Wire format is camelCase JSON; record keys are
//! UUID-shaped strings minted at create time and rendered as `table:key`.

pub mod serde_helpers;

pub mod category;
pub mod driver;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod session;
pub mod special_offer;

pub use category::{Category, CategoryCreate, CategoryId, CategoryUpdate};
pub use driver::{Driver, DriverCreate, DriverId, DriverPublic, DriverUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use order::{Order, OrderCreate, OrderId, OrderUpdate};
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
pub use session::{AdminSession, SessionCreate, SessionRole};
pub use special_offer::{SpecialOffer, SpecialOfferCreate, SpecialOfferId, SpecialOfferUpdate};
