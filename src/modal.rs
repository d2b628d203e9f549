//! Detail Modal State
//!
//! The modal shows exactly one wishlist or wish at a time. `None` inside a
//! variant means the entity is being created and has no id yet.

use crate::models::{Wish, Wishlist};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Wishlist,
    Wish,
}

/// Ids of the entity a save or delete applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTarget {
    pub kind: EntityKind,
    pub wishlist_id: Option<u64>,
    pub wish_id: Option<u64>,
}

/// What the modal shows after a successful save or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterChange {
    /// Back to the wishlist the changed wish belongs to
    ReopenWishlist(u64),
    /// Close the modal and search again
    CloseAndReload,
}

impl ModalTarget {
    pub fn next_view(&self) -> AfterChange {
        match (self.kind, self.wishlist_id) {
            (EntityKind::Wish, Some(wishlist_id)) => AfterChange::ReopenWishlist(wishlist_id),
            _ => AfterChange::CloseAndReload,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    Wishlist(Option<Wishlist>),
    Wish {
        wishlist_id: u64,
        wish: Option<Wish>,
    },
}

impl ModalContent {
    pub fn new_wishlist() -> Self {
        ModalContent::Wishlist(None)
    }

    pub fn new_wish(wishlist_id: u64) -> Self {
        ModalContent::Wish { wishlist_id, wish: None }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            ModalContent::Wishlist(_) => EntityKind::Wishlist,
            ModalContent::Wish { .. } => EntityKind::Wish,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind() {
            EntityKind::Wishlist => "Wishlist",
            EntityKind::Wish => "Wish",
        }
    }

    pub fn is_new(&self) -> bool {
        match self {
            ModalContent::Wishlist(wishlist) => wishlist.is_none(),
            ModalContent::Wish { wish, .. } => wish.is_none(),
        }
    }

    /// Wishlist the shown entity belongs to (or is)
    pub fn wishlist_id(&self) -> Option<u64> {
        match self {
            ModalContent::Wishlist(wishlist) => wishlist.as_ref().map(|w| w.id),
            ModalContent::Wish { wishlist_id, .. } => Some(*wishlist_id),
        }
    }

    pub fn target(&self) -> ModalTarget {
        ModalTarget {
            kind: self.kind(),
            wishlist_id: self.wishlist_id(),
            wish_id: match self {
                ModalContent::Wish { wish, .. } => wish.as_ref().map(|w| w.id),
                ModalContent::Wishlist(_) => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Access, WishStatus};

    fn wishlist(id: u64) -> Wishlist {
        Wishlist {
            id,
            username: "ann".to_string(),
            name: "Birthday".to_string(),
            comment: None,
            access: Access::Public,
            wishes: Vec::new(),
        }
    }

    fn wish(id: u64) -> Wish {
        Wish {
            id,
            name: "Book".to_string(),
            link: None,
            price: None,
            status: WishStatus::Free,
            comment: None,
        }
    }

    #[test]
    fn test_new_entities_have_no_ids() {
        let content = ModalContent::new_wishlist();
        assert!(content.is_new());
        assert_eq!(content.title(), "Wishlist");
        assert_eq!(
            content.target(),
            ModalTarget { kind: EntityKind::Wishlist, wishlist_id: None, wish_id: None }
        );

        let content = ModalContent::new_wish(4);
        assert!(content.is_new());
        assert_eq!(content.title(), "Wish");
        assert_eq!(
            content.target(),
            ModalTarget { kind: EntityKind::Wish, wishlist_id: Some(4), wish_id: None }
        );
    }

    #[test]
    fn test_saved_entities_carry_ids() {
        let content = ModalContent::Wishlist(Some(wishlist(4)));
        assert!(!content.is_new());
        assert_eq!(content.target().wishlist_id, Some(4));

        let content = ModalContent::Wish { wishlist_id: 4, wish: Some(wish(9)) };
        assert_eq!(
            content.target(),
            ModalTarget { kind: EntityKind::Wish, wishlist_id: Some(4), wish_id: Some(9) }
        );
    }

    #[test]
    fn test_next_view_after_change() {
        assert_eq!(
            ModalContent::new_wishlist().target().next_view(),
            AfterChange::CloseAndReload
        );
        assert_eq!(
            ModalContent::Wishlist(Some(wishlist(4))).target().next_view(),
            AfterChange::CloseAndReload
        );
        assert_eq!(
            ModalContent::new_wish(4).target().next_view(),
            AfterChange::ReopenWishlist(4)
        );
        assert_eq!(
            ModalContent::Wish { wishlist_id: 4, wish: Some(wish(9)) }.target().next_view(),
            AfterChange::ReopenWishlist(4)
        );
    }
}
