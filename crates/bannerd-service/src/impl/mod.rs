//! Service implementations.

mod auth_service_impl;
mod banner_service_impl;

pub use auth_service_impl::AuthServiceImpl;
pub use banner_service_impl::BannerServiceImpl;
