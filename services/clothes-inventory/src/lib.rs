//! clothes-inventory - 衣物库存服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
