//! Domain Layer
//!
//! Contains the menu entities, the filter/sort pipeline and checkout rules.
//! Nothing in here touches the network or storage.

mod entity;
mod menu_item;
mod restaurant;
mod cart;
mod filter;
mod checkout;

pub use entity::{Entity, MenuError, MenuResult};
pub use menu_item::{format_price, round_cents, DietaryTag, MenuItem};
pub use restaurant::{Category, Restaurant, ALL_CATEGORY_ID};
pub use cart::{CartLine, CartLineKey, SizeVariant};
pub use filter::{apply_filters, FilterState, PriceRange, SortKey};
pub use checkout::{build_checkout, whatsapp_url, CheckoutOrder, CustomerDetails};
