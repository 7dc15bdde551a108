//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 管理端登录/注销/校验
//! - [`categories`] - 分类管理接口
//! - [`restaurants`] - 餐厅管理接口 (含菜单列表)
//! - [`menu_items`] - 菜品管理接口
//! - [`orders`] - 订单接口
//! - [`drivers`] - 配送员管理接口
//! - [`special_offers`] - 促销活动接口

pub mod auth;
pub mod health;

// Data models API
pub mod categories;
pub mod drivers;
pub mod menu_items;
pub mod orders;
pub mod restaurants;
pub mod special_offers;
