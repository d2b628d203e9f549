//! UI Components
//!
//! Reusable Leptos components.

mod icons;
mod delete_confirm_button;
mod login_bar;
mod filter_bar;
mod notice_banner;
mod wishlist_table;
mod wishlist_modal;
mod field_input;
mod wishes_table;
mod subscriber_panel;
mod wish_status_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use login_bar::LoginBar;
pub use filter_bar::FilterBar;
pub use notice_banner::NoticeBanner;
pub use wishlist_table::WishlistTable;
pub use wishlist_modal::WishlistModal;
pub use field_input::FieldInput;
pub use wishes_table::WishesTable;
pub use subscriber_panel::SubscriberPanel;
pub use wish_status_bar::WishStatusBar;
