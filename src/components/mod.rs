//! UI Components
//!
//! Page sections, panels and overlays of the menu.

mod header;
mod hero;
mod category_nav;
mod filter_bar;
mod menu_grid;
mod menu_card;
mod item_modal;
mod cart_drawer;
mod checkout_form;
mod favorites_drawer;
mod toast;
mod footer;

pub use header::Header;
pub use hero::Hero;
pub use category_nav::CategoryNav;
pub use filter_bar::FilterBar;
pub use menu_grid::MenuGrid;
pub use menu_card::MenuCard;
pub use item_modal::ItemModal;
pub use cart_drawer::CartDrawer;
pub use checkout_form::CheckoutForm;
pub use favorites_drawer::FavoritesDrawer;
pub use toast::Toast;
pub use footer::Footer;

/// Shown when an item has no image
pub const PLACEHOLDER_IMAGE: &str = "/public/placeholder-dish.svg";

pub fn image_or_placeholder(image: &str) -> String {
    if image.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        image.to_string()
    }
}
