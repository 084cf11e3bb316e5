//! # Bannerd Service
//!
//! The caching and resolution core: two TTL caches, the banner resolver and
//! query engine, and the authorization gate.

pub mod auth_service;
pub mod banner_service;
pub mod cache;
pub mod dto;
pub mod r#impl;

pub use auth_service::*;
pub use banner_service::*;
pub use cache::*;
pub use dto::*;
pub use r#impl::*;
