//! View Models
//!
//! Pure shaping of server data into what the tables and buttons show.

use crate::api::{ListFilter, OrderBy};
use crate::models::{Wish, WishStatus, WishlistSummary};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistRow {
    pub id: u64,
    pub owner: String,
    pub name: String,
    pub comment: String,
    /// Only the owner may delete
    pub can_delete: bool,
}

pub fn wishlist_rows(list: &[WishlistSummary], session: &Session) -> Vec<WishlistRow> {
    list.iter()
        .map(|w| WishlistRow {
            id: w.id,
            owner: w.username.clone(),
            name: w.name.clone(),
            comment: w.comment.clone().unwrap_or_default(),
            can_delete: session.owns(&w.username),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct WishRow {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub price: String,
    pub status: WishStatus,
    pub comment: String,
}

pub fn wish_rows(wishes: &[Wish]) -> Vec<WishRow> {
    wishes
        .iter()
        .map(|w| WishRow {
            id: w.id,
            name: w.name.clone(),
            link: w.link.clone().unwrap_or_default(),
            price: w.price.map(|p| p.to_string()).unwrap_or_default(),
            status: w.status,
            comment: w.comment.clone().unwrap_or_default(),
        })
        .collect()
}

/// Action buttons shown next to a saved wish's status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishControls {
    pub book: bool,
    pub share_add: bool,
    pub share_remove: bool,
}

pub fn wish_controls(status: WishStatus) -> WishControls {
    let shared = status == WishStatus::Shared;
    WishControls {
        book: true,
        share_add: shared,
        share_remove: shared,
    }
}

/// Search form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    pub only_mine: bool,
    pub username: String,
    pub name: String,
    pub order_by: OrderBy,
}

impl FilterInput {
    /// "Only mine" replaces the username filter with the session user
    pub fn to_filter(&self, session: &Session) -> ListFilter {
        let username = if self.only_mine {
            session.username.clone()
        } else {
            self.username.trim().to_string()
        };
        let name = self.name.trim().to_string();
        ListFilter {
            username: (!username.is_empty()).then_some(username),
            name: (!name.is_empty()).then_some(name),
            order_by: self.order_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64, owner: &str, comment: Option<&str>) -> WishlistSummary {
        WishlistSummary {
            id,
            username: owner.to_string(),
            name: format!("List {}", id),
            comment: comment.map(str::to_string),
        }
    }

    fn logged_in(name: &str) -> Session {
        let mut session = Session::default();
        session.login(1, name);
        session
    }

    #[test]
    fn test_only_owned_rows_deletable() {
        let list = vec![summary(1, "ann", None), summary(2, "bob", Some("mine"))];
        let rows = wishlist_rows(&list, &logged_in("bob"));
        assert_eq!(rows.iter().filter(|r| r.can_delete).count(), 1);
        assert!(rows[1].can_delete);
        assert_eq!(rows[0].comment, "");
        assert_eq!(rows[1].comment, "mine");
    }

    #[test]
    fn test_logged_out_rows_not_deletable() {
        let list = vec![summary(1, "", None)];
        let rows = wishlist_rows(&list, &Session::default());
        assert!(!rows[0].can_delete);
    }

    #[test]
    fn test_share_controls_only_when_shared() {
        let shared = wish_controls(WishStatus::Shared);
        assert!(shared.book && shared.share_add && shared.share_remove);

        for status in [WishStatus::Free, WishStatus::Booked, WishStatus::Got] {
            let controls = wish_controls(status);
            assert!(controls.book);
            assert!(!controls.share_add);
            assert!(!controls.share_remove);
        }
    }

    #[test]
    fn test_wish_rows_blank_optional_fields() {
        let wishes = vec![Wish {
            id: 4,
            name: "Kite".to_string(),
            link: None,
            price: Some(20.0),
            status: WishStatus::Got,
            comment: None,
        }];
        let rows = wish_rows(&wishes);
        assert_eq!(rows[0].link, "");
        assert_eq!(rows[0].price, "20");
        assert_eq!(rows[0].status, WishStatus::Got);
    }

    #[test]
    fn test_filter_only_mine_uses_session() {
        let input = FilterInput {
            only_mine: true,
            username: "someone".to_string(),
            name: "  ".to_string(),
            order_by: OrderBy::Owner,
        };
        let filter = input.to_filter(&logged_in("ann"));
        assert_eq!(filter.username.as_deref(), Some("ann"));
        assert_eq!(filter.name, None);
        assert_eq!(filter.order_by, OrderBy::Owner);
    }

    #[test]
    fn test_filter_free_text_username() {
        let input = FilterInput {
            only_mine: false,
            username: " bob ".to_string(),
            name: "xmas".to_string(),
            order_by: OrderBy::Name,
        };
        let filter = input.to_filter(&logged_in("ann"));
        assert_eq!(filter.username.as_deref(), Some("bob"));
        assert_eq!(filter.name.as_deref(), Some("xmas"));
    }
}
