//! Items the player is carrying.

use std::collections::BTreeSet;

use log::info;

/// Set of collected item ids. An item is either carried or not; it is never held twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns false if it was already carried.
    pub fn add(&mut self, item_id: &str) -> bool {
        let added = self.items.insert(item_id.to_string());
        if added {
            info!("inventory: added '{item_id}'");
        }
        added
    }

    /// Remove an item. Returns false if it wasn't carried.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let removed = self.items.remove(item_id);
        if removed {
            info!("inventory: removed '{item_id}'");
        }
        removed
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.contains(item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Carried item ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_twice_keeps_one_copy() {
        let mut inventory = Inventory::new();
        assert!(inventory.add("sword"));
        assert!(!inventory.add("sword"));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.iter().filter(|i| *i == "sword").count(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let mut inventory = Inventory::new();
        inventory.add("lantern");
        assert!(inventory.remove("lantern"));
        assert!(!inventory.remove("lantern"));
        assert!(!inventory.contains("lantern"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn iter_is_sorted() {
        let mut inventory = Inventory::new();
        inventory.add("rope");
        inventory.add("apple");
        assert_eq!(inventory.iter().collect::<Vec<_>>(), vec!["apple", "rope"]);
    }
}
