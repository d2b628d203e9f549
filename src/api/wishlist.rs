//! Wishlist Endpoints

use serde_json::Value;

use super::{ApiClient, ApiError, ApiRequest, ListFilter, Routes};
use crate::models::{Wishlist, WishlistSummary};

impl Routes {
    pub fn get_wishlist(&self, id: u64) -> ApiRequest {
        self.get(&[&id.to_string()])
    }

    pub fn create_wishlist(&self, body: Value) -> ApiRequest {
        self.post(&[], body)
    }

    pub fn update_wishlist(&self, id: u64, body: Value) -> ApiRequest {
        self.patch(&[&id.to_string()]).with_body(body)
    }

    pub fn delete_wishlist(&self, id: u64) -> ApiRequest {
        self.delete(&[&id.to_string()])
    }
}

impl ApiClient {
    pub async fn list_wishlists(
        &self,
        routes: Routes,
        filter: &ListFilter,
    ) -> Result<Vec<WishlistSummary>, ApiError> {
        self.fetch(routes.list_wishlists(filter)).await
    }

    pub async fn get_wishlist(&self, routes: Routes, id: u64) -> Result<Wishlist, ApiError> {
        self.fetch(routes.get_wishlist(id)).await
    }

    pub async fn delete_wishlist(&self, routes: Routes, id: u64) -> Result<(), ApiError> {
        self.send(routes.delete_wishlist(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_wishlist_routes() {
        let routes = Routes::new(3);

        let get = routes.get_wishlist(11);
        assert_eq!(get.method, Method::GET);
        assert_eq!(get.target(), "/api/3/wishlist/11");

        let update = routes.update_wishlist(11, json!({"access": "private"}));
        assert_eq!(update.method, Method::PATCH);
        assert_eq!(update.body, Some(json!({"access": "private"})));

        let delete = routes.delete_wishlist(11);
        assert_eq!(delete.method, Method::DELETE);
        assert!(delete.body.is_none());
    }
}
