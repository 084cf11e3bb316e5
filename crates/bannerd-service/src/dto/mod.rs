//! Data transfer objects for the service layer.

mod banner_dto;

pub use banner_dto::{
    BannerResponse, CreateBannerRequest, CreateBannerResponse, UpdateBannerRequest,
};
