//! Request Building
//!
//! Requests are plain values so routing can be checked without a network.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde_json::Value;

use super::ApiError;
use crate::modal::{EntityKind, ModalTarget};
use crate::session::Session;

/// RFC 3986 unreserved characters stay as they are, everything else is escaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path, already encoded
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub(crate) fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus percent-encoded query string
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// Sort order of the wishlist search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderBy {
    #[default]
    Name,
    Owner,
}

impl OrderBy {
    pub const ALL: [OrderBy; 2] = [OrderBy::Name, OrderBy::Owner];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderBy::Name => "name",
            OrderBy::Owner => "username",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderBy::Name => "Name",
            OrderBy::Owner => "Owner",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub username: Option<String>,
    pub name: Option<String>,
    pub order_by: OrderBy,
}

/// Route builder bound to one logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    user_id: u64,
}

impl Routes {
    pub fn new(user_id: u64) -> Self {
        Self { user_id }
    }

    pub fn for_session(session: &Session) -> Result<Self, ApiError> {
        if session.is_logged_in() {
            Ok(Self::new(session.user_id))
        } else {
            Err(ApiError::NotLoggedIn)
        }
    }

    /// `/api/{userId}/wishlist` followed by the given segments
    pub(crate) fn wishlist_path(&self, segments: &[&str]) -> String {
        let mut path = format!("/api/{}/wishlist", self.user_id);
        for segment in segments {
            path.push('/');
            path.push_str(&encode(segment));
        }
        path
    }

    pub(crate) fn get(&self, segments: &[&str]) -> ApiRequest {
        ApiRequest::new(Method::GET, self.wishlist_path(segments))
    }

    pub(crate) fn post(&self, segments: &[&str], body: Value) -> ApiRequest {
        ApiRequest::new(Method::POST, self.wishlist_path(segments)).with_body(body)
    }

    pub(crate) fn patch(&self, segments: &[&str]) -> ApiRequest {
        ApiRequest::new(Method::PATCH, self.wishlist_path(segments))
    }

    pub(crate) fn put(&self, segments: &[&str]) -> ApiRequest {
        ApiRequest::new(Method::PUT, self.wishlist_path(segments))
    }

    pub(crate) fn delete(&self, segments: &[&str]) -> ApiRequest {
        ApiRequest::new(Method::DELETE, self.wishlist_path(segments))
    }

    pub fn list_wishlists(&self, filter: &ListFilter) -> ApiRequest {
        let mut request = self.get(&["list"]);
        if let Some(username) = filter.username.as_deref().filter(|u| !u.is_empty()) {
            request = request.with_query("username", username);
        }
        if let Some(name) = filter.name.as_deref().filter(|n| !n.is_empty()) {
            request = request.with_query("name", name);
        }
        request.with_query("orderBy", filter.order_by.as_str())
    }

    /// Create or update whatever the modal shows
    pub fn save(&self, target: &ModalTarget, body: Value) -> Result<ApiRequest, ApiError> {
        match (target.kind, target.wishlist_id, target.wish_id) {
            (EntityKind::Wishlist, None, _) => Ok(self.create_wishlist(body)),
            (EntityKind::Wishlist, Some(id), _) => Ok(self.update_wishlist(id, body)),
            (EntityKind::Wish, Some(wishlist_id), None) => Ok(self.create_wish(wishlist_id, body)),
            (EntityKind::Wish, Some(wishlist_id), Some(wish_id)) => {
                Ok(self.update_wish(wishlist_id, wish_id, body))
            }
            (EntityKind::Wish, None, _) => Err(ApiError::InvalidState("wish has no wishlist")),
        }
    }

    /// Delete whatever the modal shows
    pub fn remove(&self, target: &ModalTarget) -> Result<ApiRequest, ApiError> {
        match (target.kind, target.wishlist_id, target.wish_id) {
            (EntityKind::Wishlist, Some(id), _) => Ok(self.delete_wishlist(id)),
            (EntityKind::Wish, Some(wishlist_id), Some(wish_id)) => {
                Ok(self.delete_wish(wishlist_id, wish_id))
            }
            _ => Err(ApiError::InvalidState("nothing saved to delete")),
        }
    }
}
