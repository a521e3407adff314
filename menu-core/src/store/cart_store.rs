//! Cart Store
//!
//! Lines are keyed by (item id, size). Quantities never drop below 1:
//! `update_quantity` ignores values under 1 and `decrement` removes instead.

use crate::domain::{round_cents, CartLine, CartLineKey, Entity, MenuItem, SizeVariant};
use crate::repository::{load_collection, save_collection, KeyValueStore, CART_KEY};

#[derive(Debug, Clone)]
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    lines: Vec<CartLine>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the persisted cart; malformed data yields an empty cart
    pub fn load(storage: S) -> Self {
        let lines: Vec<CartLine> = load_collection(&storage, CART_KEY);
        let lines: Vec<CartLine> = lines.into_iter().filter(|line| line.quantity >= 1).collect();
        log::debug!("cart loaded with {} lines", lines.len());
        Self { storage, lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, key: &CartLineKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == *key)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of `item` in `size`, merging with an existing line
    pub fn add(&mut self, item: &MenuItem, size: SizeVariant, quantity: u32) -> CartLineKey {
        let key = CartLineKey::new(item.id.clone(), size);
        if quantity == 0 {
            return key;
        }

        match self.lines.iter_mut().find(|line| line.id() == key) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine::new(item, size, quantity)),
        }
        self.persist();
        key
    }

    /// Delete the line unconditionally; returns whether it existed
    pub fn remove(&mut self, key: &CartLineKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != *key);
        let removed = self.lines.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Replace the quantity; values under 1 are ignored
    pub fn update_quantity(&mut self, key: &CartLineKey, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        let Some(line) = self.lines.iter_mut().find(|line| line.id() == *key) else {
            return false;
        };
        line.quantity = quantity;
        self.persist();
        true
    }

    pub fn increment(&mut self, key: &CartLineKey) -> bool {
        match self.line(key).map(|line| line.quantity) {
            Some(quantity) => self.update_quantity(key, quantity.saturating_add(1)),
            None => false,
        }
    }

    /// Decrease by one, removing the line when it would reach zero
    pub fn decrement(&mut self, key: &CartLineKey) -> bool {
        match self.line(key).map(|line| line.quantity) {
            Some(quantity) if quantity > 1 => self.update_quantity(key, quantity - 1),
            Some(_) => self.remove(key),
            None => false,
        }
    }

    /// Empty the cart and drop its storage entry
    pub fn clear(&mut self) {
        self.lines.clear();
        if let Err(e) = self.storage.remove(CART_KEY) {
            log::error!("failed to clear stored cart: {}", e);
        }
    }

    /// Sum of unit price times quantity
    pub fn total(&self) -> f64 {
        round_cents(
            self.lines
                .iter()
                .map(|line| line.unit_price * f64::from(line.quantity))
                .sum(),
        )
    }

    /// Sum of quantities, for the badge (saturates at `u32::MAX`)
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    fn persist(&self) {
        if let Err(e) = save_collection(&self.storage, CART_KEY, &self.lines) {
            log::error!("failed to persist cart: {}", e);
        }
    }
}
