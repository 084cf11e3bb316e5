//! # Bannerd Repository
//!
//! Data access layer for bannerd: the Store the caching core reads through.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn BannerRepository> / Arc<dyn UserRepository>
//! PgBannerRepository / PgUserRepository   (Postgres / SQLx)
//!   ↓
//! Postgres
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
