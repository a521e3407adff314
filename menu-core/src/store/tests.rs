//! Store Integration Tests
//!
//! Exercises the stores against the in-memory and mocked key-value stores.

#[cfg(test)]
mod tests {
    use mockall::predicate::{always, eq};

    use crate::domain::{CartLine, MenuError, MenuItem, SizeVariant};
    use crate::repository::{KeyValueStore, MemoryStore, MockKeyValueStore, CART_KEY, FAVORITES_KEY};
    use crate::store::{CartStore, FavoritesStore};

    fn curry() -> MenuItem {
        let mut item = MenuItem::new("c1", "Curry", 13.0);
        item.dietary = vec!["gluten-free".to_string()];
        item
    }

    #[test]
    fn test_cart_survives_reload() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::load(storage.clone());
        cart.add(&curry(), SizeVariant::Large, 2);
        cart.add(&MenuItem::new("n1", "Naan", 3.0), SizeVariant::Small, 1);

        let reloaded = CartStore::load(storage);
        assert_eq!(reloaded.lines(), cart.lines());
        assert_eq!(reloaded.total(), 37.0);
        assert_eq!(reloaded.count(), 3);
    }

    #[test]
    fn test_corrupted_cart_loads_empty() {
        let storage = MemoryStore::new().with_entry(CART_KEY, "{{not json");
        let cart = CartStore::load(storage);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_zero_quantity_lines_are_dropped_on_load() {
        let mut line = CartLine::new(&curry(), SizeVariant::Small, 1);
        line.quantity = 0;
        let raw = serde_json::to_string(&vec![line]).unwrap();
        let cart = CartStore::load(MemoryStore::new().with_entry(CART_KEY, &raw));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_drops_stored_cart() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::load(storage.clone());
        cart.add(&curry(), SizeVariant::Small, 1);
        cart.clear();
        assert_eq!(storage.get(CART_KEY).unwrap(), None);
        assert!(CartStore::load(storage).is_empty());
    }

    #[test]
    fn test_clear_removes_key_instead_of_writing() {
        let mut storage = MockKeyValueStore::new();
        storage.expect_get().returning(|_| Ok(None));
        storage.expect_set().times(1).returning(|_, _| Ok(()));
        storage.expect_remove().with(eq(CART_KEY)).times(1).returning(|_| Ok(()));

        let mut cart = CartStore::load(storage);
        cart.add(&curry(), SizeVariant::Small, 1);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_stored_cart_with_huge_quantities_counts_without_overflow() {
        let mut big = CartLine::new(&curry(), SizeVariant::Small, 1);
        big.quantity = u32::MAX;
        let small = CartLine::new(&curry(), SizeVariant::Large, 1);
        let raw = serde_json::to_string(&vec![big, small]).unwrap();

        let cart = CartStore::load(MemoryStore::new().with_entry(CART_KEY, &raw));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.count(), u32::MAX);
    }

    #[test]
    fn test_favorites_survive_reload() {
        let storage = MemoryStore::new();
        let mut favorites = FavoritesStore::load(storage.clone());
        favorites.toggle(&curry());

        let reloaded = FavoritesStore::load(storage);
        assert!(reloaded.is_favorite("c1"));
        assert_eq!(reloaded.items()[0].dietary, vec!["gluten-free".to_string()]);
    }

    #[test]
    fn test_cart_and_favorites_use_separate_keys() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::load(storage.clone());
        let mut favorites = FavoritesStore::load(storage.clone());
        cart.add(&curry(), SizeVariant::Small, 1);
        favorites.toggle(&curry());
        assert_eq!(storage.len(), 2);
        assert!(storage.get(FAVORITES_KEY).unwrap().is_some());
    }

    #[test]
    fn test_cart_writes_once_per_mutation() {
        let mut storage = MockKeyValueStore::new();
        storage.expect_get().with(eq(CART_KEY)).times(1).returning(|_| Ok(None));
        // add, update, remove; the rejected zero update must not write
        storage
            .expect_set()
            .with(eq(CART_KEY), always())
            .times(3)
            .returning(|_, _| Ok(()));

        let mut cart = CartStore::load(storage);
        let key = cart.add(&curry(), SizeVariant::Medium, 1);
        cart.update_quantity(&key, 3);
        cart.update_quantity(&key, 0);
        cart.remove(&key);
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let mut storage = MockKeyValueStore::new();
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .returning(|_, _| Err(MenuError::Storage("quota exceeded".to_string())));

        let mut favorites = FavoritesStore::load(storage);
        assert!(favorites.toggle(&curry()));
        assert!(favorites.is_favorite("c1"));
    }
}
