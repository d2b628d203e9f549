//! Frontend Models
//!
//! Data structures matching the wishlist API responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wishlist visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Public,
    Private,
}

impl Access {
    pub const ALL: [Access; 2] = [Access::Public, Access::Private];

    pub fn as_str(self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Private => "private",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fulfillment state of a wish.
///
/// The usual progression is free → booked → shared → got, but nothing
/// enforces it: whichever value the user picks is sent to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishStatus {
    #[default]
    Free,
    Booked,
    Shared,
    Got,
}

impl WishStatus {
    pub const ALL: [WishStatus; 4] = [
        WishStatus::Free,
        WishStatus::Booked,
        WishStatus::Shared,
        WishStatus::Got,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WishStatus::Free => "free",
            WishStatus::Booked => "booked",
            WishStatus::Shared => "shared",
            WishStatus::Got => "got",
        }
    }

    /// Parse the value of the status selector
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for WishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row of the wishlist search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistSummary {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Wishlist with its wishes (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub wishes: Vec<Wish>,
}

/// Single wish (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: WishStatus,
    #[serde(default)]
    pub comment: Option<String>,
}

/// User granted access to a wishlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_from_json() {
        let json = r#"{
            "id": 7,
            "username": "ann",
            "name": "Birthday",
            "comment": null,
            "access": "private",
            "wishes": [
                {"id": 1, "name": "Book", "price": 12.5, "status": "shared"},
                {"id": 2, "name": "Pen", "link": "https://pens.example"}
            ]
        }"#;
        let wishlist: Wishlist = serde_json::from_str(json).unwrap();
        assert_eq!(wishlist.access, Access::Private);
        assert_eq!(wishlist.wishes.len(), 2);
        assert_eq!(wishlist.wishes[0].status, WishStatus::Shared);
        assert_eq!(wishlist.wishes[0].price, Some(12.5));
        assert_eq!(wishlist.wishes[1].status, WishStatus::Free);
        assert!(wishlist.comment.is_none());
    }

    #[test]
    fn test_wishlist_without_owner_name() {
        let summary: WishlistSummary =
            serde_json::from_str(r#"{"id": 3, "name": "Garden"}"#).unwrap();
        assert_eq!(summary.username, "");

        let wishlist: Wishlist = serde_json::from_str(r#"{"id": 3, "name": "Garden"}"#).unwrap();
        assert_eq!(wishlist.username, summary.username);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(WishStatus::parse("got"), Some(WishStatus::Got));
        assert_eq!(WishStatus::parse("Got"), None);
        assert_eq!(WishStatus::Booked.to_string(), "booked");
    }
}
