//! HTTP 接口层

mod dto;
mod error;
mod handlers;
pub mod messages;
mod routes;

pub use dto::*;
pub use error::*;
pub use routes::*;
