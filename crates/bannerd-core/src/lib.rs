//! # Bannerd Core
//!
//! Core types, entities, and error definitions for bannerd.
//! This crate provides the foundational abstractions used across all layers
//! of the service.

pub mod domain;
pub mod error;
pub mod filter;
pub mod id;
pub mod result;

pub use domain::*;
pub use error::*;
pub use filter::*;
pub use id::*;
pub use result::*;
