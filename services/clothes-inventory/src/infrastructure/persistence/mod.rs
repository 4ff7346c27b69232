//! 持久化层

mod postgres;
mod rows;

pub use postgres::*;
