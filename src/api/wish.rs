//! Wish Endpoints
//!
//! Single wishes, their status and the per-wish sharing sub-resource.

use serde_json::Value;

use super::{ApiClient, ApiError, ApiRequest, Routes};
use crate::models::{Wish, WishStatus};

impl Routes {
    pub fn get_wish(&self, wishlist_id: u64, wish_id: u64) -> ApiRequest {
        self.get(&[&wishlist_id.to_string(), &wish_id.to_string()])
    }

    pub fn create_wish(&self, wishlist_id: u64, body: Value) -> ApiRequest {
        self.post(&[&wishlist_id.to_string(), "wish"], body)
    }

    pub fn update_wish(&self, wishlist_id: u64, wish_id: u64, body: Value) -> ApiRequest {
        self.patch(&[&wishlist_id.to_string(), &wish_id.to_string()])
            .with_body(body)
    }

    pub fn delete_wish(&self, wishlist_id: u64, wish_id: u64) -> ApiRequest {
        self.delete(&[&wishlist_id.to_string(), &wish_id.to_string()])
    }

    pub fn set_wish_status(&self, wishlist_id: u64, wish_id: u64, status: WishStatus) -> ApiRequest {
        self.patch(&[&wishlist_id.to_string(), "wish", &wish_id.to_string()])
            .with_query("status", status.as_str())
    }

    pub fn join_share(&self, wishlist_id: u64, wish_id: u64) -> ApiRequest {
        self.put(&[&wishlist_id.to_string(), "wish", &wish_id.to_string(), "user"])
    }

    pub fn leave_share(&self, wishlist_id: u64, wish_id: u64) -> ApiRequest {
        self.delete(&[&wishlist_id.to_string(), "wish", &wish_id.to_string(), "user"])
    }
}

impl ApiClient {
    pub async fn get_wish(&self, routes: Routes, wishlist_id: u64, wish_id: u64) -> Result<Wish, ApiError> {
        self.fetch(routes.get_wish(wishlist_id, wish_id)).await
    }

    /// Book (or otherwise re-status) a wish; returns the updated wish
    pub async fn set_wish_status(
        &self,
        routes: Routes,
        wishlist_id: u64,
        wish_id: u64,
        status: WishStatus,
    ) -> Result<Wish, ApiError> {
        self.fetch(routes.set_wish_status(wishlist_id, wish_id, status)).await
    }

    pub async fn join_share(&self, routes: Routes, wishlist_id: u64, wish_id: u64) -> Result<(), ApiError> {
        self.send(routes.join_share(wishlist_id, wish_id)).await
    }

    pub async fn leave_share(&self, routes: Routes, wishlist_id: u64, wish_id: u64) -> Result<(), ApiError> {
        self.send(routes.leave_share(wishlist_id, wish_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_get_wish_route() {
        let request = Routes::new(1).get_wish(9, 3);
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.target(), "/api/1/wishlist/9/3");
    }

    #[test]
    fn test_status_route() {
        let request = Routes::new(1).set_wish_status(9, 3, WishStatus::Booked);
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.target(), "/api/1/wishlist/9/wish/3?status=booked");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_share_routes() {
        let routes = Routes::new(1);

        let join = routes.join_share(9, 3);
        assert_eq!(join.method, Method::PUT);
        assert_eq!(join.target(), "/api/1/wishlist/9/wish/3/user");

        let leave = routes.leave_share(9, 3);
        assert_eq!(leave.method, Method::DELETE);
        assert_eq!(leave.target(), "/api/1/wishlist/9/wish/3/user");
    }
}
