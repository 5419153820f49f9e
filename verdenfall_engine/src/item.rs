//! Items and the containers that hold them.
//!
//! An item is owned by exactly one [`ItemStore`] at a time: a room's floor or
//! the player's bag. Moving an item between stores is a transfer of the value,
//! never a copy, and each store keeps its weight total in step with its contents.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Weight in whole grams so totals stay exact across any number of transfers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u64);
impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub fn from_grams(grams: u64) -> Weight {
        Weight(grams)
    }

    /// Converts a kilogram figure from world data. Negative or non-finite input clamps to zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_kg(kg: f64) -> Weight {
        if kg.is_finite() && kg > 0.0 {
            Weight((kg * 1000.0).round() as u64)
        } else {
            Weight::ZERO
        }
    }

    pub fn grams(self) -> u64 {
        self.0
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn kg(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}
impl Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.kg())
    }
}
impl Add for Weight {
    type Output = Weight;
    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0.saturating_add(rhs.0))
    }
}
impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        *self = *self + rhs;
    }
}
impl Sub for Weight {
    type Output = Weight;
    fn sub(self, rhs: Weight) -> Weight {
        Weight(self.0.saturating_sub(rhs.0))
    }
}
impl SubAssign for Weight {
    fn sub_assign(&mut self, rhs: Weight) {
        *self = *self - rhs;
    }
}
impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Add::add)
    }
}
impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Weight {
        iter.copied().sum()
    }
}

/// A takeable object. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    weight: Weight,
}
impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, weight: Weight) -> Item {
        Item {
            name: name.into(),
            description: description.into(),
            weight,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn weight(&self) -> Weight {
        self.weight
    }
}
impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.description, self.weight)
    }
}

/// A collection of items keyed by name (case-insensitive) with a running weight total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: BTreeMap<String, Item>,
    total: Weight,
}
impl ItemStore {
    pub fn new() -> ItemStore {
        ItemStore::default()
    }

    /// Adds an item, returning any item it displaced under the same name.
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        self.total += item.weight();
        let displaced = self.items.insert(item.name().to_lowercase(), item);
        if let Some(old) = &displaced {
            self.total -= old.weight();
        }
        displaced
    }

    /// Removes and returns the named item, if present.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let item = self.items.remove(&name.to_lowercase())?;
        self.total -= item.weight();
        Some(item)
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&name.to_lowercase())
    }

    /// Items in stable (alphabetical) order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The running total, maintained on every insert and remove.
    pub fn total_weight(&self) -> Weight {
        self.total
    }

    /// Sums the contents from scratch.
    pub fn recomputed_weight(&self) -> Weight {
        self.items.values().map(Item::weight).sum()
    }
}

/// Methods common to anything that holds an [`ItemStore`].
pub trait ItemHolder {
    fn items(&self) -> &ItemStore;
    fn items_mut(&mut self) -> &mut ItemStore;

    fn add_item(&mut self, item: Item) -> Option<Item> {
        self.items_mut().insert(item)
    }
    fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items_mut().remove(name)
    }
    fn contains_item(&self, name: &str) -> bool {
        self.items().contains(name)
    }
    fn current_weight(&self) -> Weight {
        self.items().total_weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> Item {
        Item::new("sword", "A notched blade", Weight::from_kg(2.0))
    }

    #[test]
    fn weight_conversions_are_exact() {
        assert_eq!(Weight::from_kg(3.5).grams(), 3500);
        assert_eq!(Weight::from_kg(1.2).grams(), 1200);
        assert_eq!(Weight::from_kg(-4.0), Weight::ZERO);
        assert_eq!(Weight::from_kg(f64::NAN), Weight::ZERO);
        assert_eq!(Weight::from_grams(1500).to_string(), "1.5 kg");
    }

    #[test]
    fn weight_subtraction_never_goes_negative() {
        assert_eq!(Weight::from_grams(1) - Weight::from_grams(5), Weight::ZERO);
    }

    #[test]
    fn store_tracks_weight_on_insert_and_remove() {
        let mut store = ItemStore::new();
        store.insert(sword());
        store.insert(Item::new("mask", "A fog mask", Weight::from_kg(1.0)));
        assert_eq!(store.total_weight(), Weight::from_kg(3.0));

        let removed = store.remove("SWORD").unwrap();
        assert_eq!(removed.name(), "sword");
        assert_eq!(store.total_weight(), Weight::from_kg(1.0));
        assert_eq!(store.total_weight(), store.recomputed_weight());
    }

    #[test]
    fn store_remove_missing_is_noop() {
        let mut store = ItemStore::new();
        store.insert(sword());
        assert!(store.remove("shield").is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_weight(), Weight::from_kg(2.0));
    }

    #[test]
    fn store_insert_same_name_replaces_and_rebalances() {
        let mut store = ItemStore::new();
        store.insert(sword());
        let displaced = store.insert(Item::new("Sword", "A heavier blade", Weight::from_kg(5.0)));
        assert_eq!(displaced, Some(sword()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_weight(), Weight::from_kg(5.0));
    }

    #[test]
    fn store_iterates_in_name_order() {
        let mut store = ItemStore::new();
        store.insert(Item::new("shield", "round", Weight::ZERO));
        store.insert(Item::new("axe", "sharp", Weight::ZERO));
        let names: Vec<_> = store.iter().map(Item::name).collect();
        assert_eq!(names, ["axe", "shield"]);
    }

    #[test]
    fn item_display_includes_weight() {
        assert_eq!(sword().to_string(), "sword: A notched blade (2 kg)");
    }
}
