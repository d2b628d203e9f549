//! Wishlist API
//!
//! REST bindings for the `/api/{userId}/wishlist` resource tree, organized
//! by resource. Every endpoint has a pure route builder on [`Routes`] and an
//! async wrapper on [`ApiClient`].

mod error;
mod request;
mod client;
mod wishlist;
mod wish;
mod access;

pub use error::ApiError;
pub use request::{ApiRequest, ListFilter, OrderBy, Routes};
pub use client::ApiClient;
