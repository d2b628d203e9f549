//! Access Endpoints
//!
//! Subscribers of a wishlist.

use super::{ApiClient, ApiError, ApiRequest, Routes};
use crate::models::Subscriber;

impl Routes {
    pub fn list_subscribers(&self, wishlist_id: u64) -> ApiRequest {
        self.get(&[&wishlist_id.to_string(), "users"])
    }

    pub fn subscribe(&self, wishlist_id: u64, username: &str) -> ApiRequest {
        self.put(&[&wishlist_id.to_string(), "access"])
            .with_query("username", username)
    }

    pub fn unsubscribe(&self, wishlist_id: u64, username: &str) -> ApiRequest {
        self.delete(&[&wishlist_id.to_string(), "access"])
            .with_query("username", username)
    }
}

impl ApiClient {
    pub async fn list_subscribers(&self, routes: Routes, wishlist_id: u64) -> Result<Vec<Subscriber>, ApiError> {
        self.fetch(routes.list_subscribers(wishlist_id)).await
    }

    pub async fn subscribe(&self, routes: Routes, wishlist_id: u64, username: &str) -> Result<(), ApiError> {
        self.send(routes.subscribe(wishlist_id, username)).await
    }

    pub async fn unsubscribe(&self, routes: Routes, wishlist_id: u64, username: &str) -> Result<(), ApiError> {
        self.send(routes.unsubscribe(wishlist_id, username)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_subscriber_routes() {
        let routes = Routes::new(2);

        let list = routes.list_subscribers(8);
        assert_eq!(list.method, Method::GET);
        assert_eq!(list.target(), "/api/2/wishlist/8/users");

        let add = routes.subscribe(8, "ann");
        assert_eq!(add.method, Method::PUT);
        assert_eq!(add.target(), "/api/2/wishlist/8/access?username=ann");

        let remove = routes.unsubscribe(8, "o'neil");
        assert_eq!(remove.method, Method::DELETE);
        assert_eq!(remove.target(), "/api/2/wishlist/8/access?username=o%27neil");
    }
}
