pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use crate::config::AppConfig;
pub use crate::db::{create_memory_pool, create_pool};
pub use crate::error::{FarmError, FarmResult};
pub use crate::service::FarmService;
