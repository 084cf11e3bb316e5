//! Request extractors.

mod query;

pub use query::{ListBannersQuery, UserBannerQuery};
