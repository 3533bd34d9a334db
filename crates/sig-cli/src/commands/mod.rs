pub mod actions;
pub mod config;
pub mod dispatch;
pub mod generate;
pub mod members;
pub mod render;
pub mod schema;
pub mod shared;
