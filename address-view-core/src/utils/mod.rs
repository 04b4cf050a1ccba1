//! 工具模块

mod address;
pub mod datetime;

pub use address::shorten_address;
