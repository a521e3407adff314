//! Filter/Sort Pipeline
//!
//! Category and free-text search are applied by the server through query
//! parameters. Everything here runs client-side over the fetched list:
//! price bucket, then dietary tags (all must match), then a stable sort.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::entity::MenuError;
use super::menu_item::{DietaryTag, MenuItem};
use super::restaurant::ALL_CATEGORY_ID;

/// Coarse price buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceRange {
    #[default]
    All,
    /// Under $10
    Budget,
    /// $10 - $20
    Mid,
    /// $20 - $30
    Premium,
    /// Over $30
    Luxury,
}

impl PriceRange {
    pub const ALL: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::Budget,
        PriceRange::Mid,
        PriceRange::Premium,
        PriceRange::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Budget => "budget",
            PriceRange::Mid => "mid",
            PriceRange::Premium => "premium",
            PriceRange::Luxury => "luxury",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => "All Prices",
            PriceRange::Budget => "Under $10",
            PriceRange::Mid => "$10 - $20",
            PriceRange::Premium => "$20 - $30",
            PriceRange::Luxury => "Over $30",
        }
    }

    /// Inclusive lower bound and exclusive upper bound (None = unbounded)
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            PriceRange::All => (0.0, None),
            PriceRange::Budget => (0.0, Some(10.0)),
            PriceRange::Mid => (10.0, Some(20.0)),
            PriceRange::Premium => (20.0, Some(30.0)),
            PriceRange::Luxury => (30.0, None),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        if *self == PriceRange::All {
            return true;
        }
        let (min, max) = self.bounds();
        price >= min && max.map_or(true, |max| price < max)
    }
}

impl FromStr for PriceRange {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| MenuError::InvalidInput(format!("unknown price range '{}'", s)))
    }
}

/// Ordering applied to the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Server order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    Popular,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Default,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::Popular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::Popular => "popular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A to Z",
            SortKey::NameDesc => "Name: Z to A",
            SortKey::Popular => "Most Popular",
        }
    }

    fn compare(&self, a: &MenuItem, b: &MenuItem) -> Ordering {
        match self {
            SortKey::Default => Ordering::Equal,
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::NameAsc => compare_names(&a.name, &b.name),
            SortKey::NameDesc => compare_names(&b.name, &a.name),
            SortKey::Popular => b.popular.cmp(&a.popular),
        }
    }
}

impl FromStr for SortKey {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| MenuError::InvalidInput(format!("unknown sort key '{}'", s)))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collation key: accents stripped (NFD minus combining marks), then lowercased
fn collation_key(name: &str) -> String {
    name.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

/// Base letters first, then accents and case, raw string last
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// View-only filter selections (never persisted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    /// Raw search text; the UI debounces it before fetching
    pub search: String,
    pub price_range: PriceRange,
    pub dietary: BTreeSet<DietaryTag>,
    pub sort: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY_ID.to_string(),
            search: String::new(),
            price_range: PriceRange::All,
            dietary: BTreeSet::new(),
            sort: SortKey::Default,
        }
    }
}

impl FilterState {
    /// Select the tag if absent, deselect it otherwise
    pub fn toggle_dietary(&mut self, tag: DietaryTag) {
        if !self.dietary.remove(&tag) {
            self.dietary.insert(tag);
        }
    }

    pub fn active_filter_count(&self) -> usize {
        usize::from(self.price_range != PriceRange::All) + self.dietary.len()
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Reset the client-side refinements (price and dietary)
    pub fn clear_filters(&mut self) {
        self.price_range = PriceRange::All;
        self.dietary.clear();
    }

    fn matches(&self, item: &MenuItem) -> bool {
        self.price_range.contains(item.price) && self.dietary.iter().all(|tag| item.has_dietary(*tag))
    }
}

/// Derive the displayed list from the fetched one
pub fn apply_filters(items: &[MenuItem], filters: &FilterState) -> Vec<MenuItem> {
    let mut result: Vec<MenuItem> = items
        .iter()
        .filter(|item| filters.matches(item))
        .cloned()
        .collect();

    if filters.sort != SortKey::Default {
        // sort_by is stable, ties keep server order
        result.sort_by(|a, b| filters.sort.compare(a, b));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem::new(id, name, price)
    }

    fn with_tags(mut item: MenuItem, tags: &[&str]) -> MenuItem {
        item.dietary = tags.iter().map(|t| t.to_string()).collect();
        item
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_budget_bucket_boundaries() {
        let items = vec![make_item("1", "Fries", 9.99), make_item("2", "Salad", 10.0)];
        let filters = FilterState {
            price_range: PriceRange::Budget,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &filters)), vec!["Fries"]);

        let filters = FilterState {
            price_range: PriceRange::Mid,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &filters)), vec!["Salad"]);
    }

    #[test]
    fn test_top_bucket_is_unbounded() {
        assert!(PriceRange::Luxury.contains(30.0));
        assert!(PriceRange::Luxury.contains(1_000.0));
        assert!(!PriceRange::Premium.contains(30.0));
        assert!(PriceRange::All.contains(0.0));
    }

    #[test]
    fn test_dietary_filter_requires_all_tags() {
        let items = vec![
            with_tags(make_item("1", "Veg Pasta", 12.0), &["vegetarian"]),
            with_tags(make_item("2", "Veg Risotto", 14.0), &["vegetarian", "gluten-free"]),
        ];
        let mut filters = FilterState::default();
        filters.toggle_dietary(DietaryTag::Vegetarian);
        filters.toggle_dietary(DietaryTag::GlutenFree);
        assert_eq!(names(&apply_filters(&items, &filters)), vec!["Veg Risotto"]);
    }

    #[test]
    fn test_toggle_dietary_twice_clears() {
        let mut filters = FilterState::default();
        filters.toggle_dietary(DietaryTag::Vegan);
        assert_eq!(filters.active_filter_count(), 1);
        filters.toggle_dietary(DietaryTag::Vegan);
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_sort_name_desc() {
        let items = vec![
            make_item("1", "Burger", 10.0),
            make_item("2", "Apple Pie", 6.0),
            make_item("3", "Curry", 13.0),
        ];
        let filters = FilterState {
            sort: SortKey::NameDesc,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &filters)), vec!["Curry", "Burger", "Apple Pie"]);
    }

    #[test]
    fn test_sort_name_is_case_insensitive() {
        let items = vec![make_item("1", "banana split", 5.0), make_item("2", "Apple Pie", 6.0)];
        let filters = FilterState {
            sort: SortKey::NameAsc,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &filters)), vec!["Apple Pie", "banana split"]);
    }

    #[test]
    fn test_sort_name_ignores_accents() {
        let items = vec![
            make_item("1", "Zucchini Fritters", 9.0),
            make_item("2", "Éclair", 4.0),
            make_item("3", "Dal", 8.0),
        ];
        let asc = FilterState {
            sort: SortKey::NameAsc,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &asc)), vec!["Dal", "Éclair", "Zucchini Fritters"]);
        let desc = FilterState {
            sort: SortKey::NameDesc,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &desc)), vec!["Zucchini Fritters", "Éclair", "Dal"]);
    }

    #[test]
    fn test_accented_name_sorts_next_to_plain_spelling() {
        assert_eq!(compare_names("Crème Brûlée", "Creme Brulee"), Ordering::Greater);
        assert_eq!(compare_names("crème", "Cremini"), Ordering::Less);
        assert_eq!(compare_names("Dal", "Dal"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_price() {
        let items = vec![
            make_item("1", "B", 12.0),
            make_item("2", "A", 4.5),
            make_item("3", "C", 30.0),
        ];
        let asc = FilterState {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &asc)), vec!["A", "B", "C"]);
        let desc = FilterState {
            sort: SortKey::PriceDesc,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &desc)), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_popular_sort_is_stable() {
        let mut popular_late = make_item("3", "Late", 8.0);
        popular_late.popular = true;
        let mut popular_early = make_item("1", "Early", 8.0);
        popular_early.popular = true;
        let items = vec![popular_early, make_item("2", "Plain", 8.0), popular_late, make_item("4", "Other", 8.0)];
        let filters = FilterState {
            sort: SortKey::Popular,
            ..Default::default()
        };
        assert_eq!(names(&apply_filters(&items, &filters)), vec!["Early", "Late", "Plain", "Other"]);
    }

    #[test]
    fn test_default_sort_keeps_server_order() {
        let items = vec![make_item("1", "Zucchini", 3.0), make_item("2", "Apple", 2.0)];
        let result = apply_filters(&items, &FilterState::default());
        assert_eq!(result, items);
    }

    #[test]
    fn test_clear_filters_keeps_sort_and_category() {
        let mut filters = FilterState {
            category: "mains".to_string(),
            price_range: PriceRange::Premium,
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        filters.toggle_dietary(DietaryTag::Vegan);
        assert_eq!(filters.active_filter_count(), 2);
        filters.clear_filters();
        assert!(!filters.has_active_filters());
        assert_eq!(filters.sort, SortKey::PriceAsc);
        assert_eq!(filters.category, "mains");
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("price-desc".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
        assert_eq!("luxury".parse::<PriceRange>().unwrap(), PriceRange::Luxury);
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
