//! Catalog interface and in-memory implementation.
//!
//! The catalog is the only external collaborator the order core consumes.
//! It is an explicitly constructed, explicitly passed instance with a single
//! owner in the call graph — never a hidden global.

use mealflow_core::{DomainError, DomainResult, Entity, MenuItemId};

use crate::item::MenuItem;

/// Menu lookup/availability as seen by order processing.
///
/// Missing items are represented as `None`, not errors; availability toggles
/// on unknown ids are silent no-ops.
pub trait Catalog {
    /// Look up a single item by id.
    fn lookup(&self, id: MenuItemId) -> Option<&MenuItem>;

    /// All currently available items, sorted by category then name.
    fn list_available(&self) -> Vec<&MenuItem>;

    /// Case-insensitive substring search over name, description, and
    /// category, restricted to available items. A blank term falls back to
    /// [`Catalog::list_available`].
    fn search(&self, term: &str) -> Vec<&MenuItem>;

    /// Toggle availability of an item; no-op when the id is unknown.
    fn set_availability(&mut self, id: MenuItemId, available: bool);
}

/// In-memory catalog.
///
/// Also carries the administrative surface (add/remove/projections) that
/// sits outside the [`Catalog`] seam the order core depends on.
#[derive(Debug, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the menu.
    ///
    /// Duplicate ids are a conflict: the menu is keyed by item identity.
    pub fn add_item(&mut self, item: MenuItem) -> DomainResult<()> {
        if self.items.iter().any(|i| i.id() == item.id()) {
            return Err(DomainError::conflict(format!(
                "menu item {} already exists",
                item.id_typed()
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove an item; returns whether anything was removed.
    pub fn remove_item(&mut self, id: MenuItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id_typed() != id);
        self.items.len() != before
    }

    /// All items regardless of availability, sorted by category then name.
    pub fn all_items(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.iter().collect();
        sort_by_category_then_name(&mut items);
        items
    }

    /// Available items in the given category (case-insensitive), sorted by name.
    pub fn items_by_category(&self, category: &str) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self
            .items
            .iter()
            .filter(|i| i.is_available() && i.category().eq_ignore_ascii_case(category))
            .collect();
        items.sort_by(|a, b| a.name().cmp(b.name()));
        items
    }

    /// Distinct category labels, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.items.iter().map(|i| i.category().to_string()).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

impl Catalog for MenuCatalog {
    fn lookup(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id_typed() == id)
    }

    fn list_available(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> =
            self.items.iter().filter(|i| i.is_available()).collect();
        sort_by_category_then_name(&mut items);
        items
    }

    fn search(&self, term: &str) -> Vec<&MenuItem> {
        let term = term.trim();
        if term.is_empty() {
            return self.list_available();
        }

        let needle = term.to_lowercase();
        let mut items: Vec<&MenuItem> = self
            .items
            .iter()
            .filter(|i| {
                i.is_available()
                    && (i.name().to_lowercase().contains(&needle)
                        || i.description().to_lowercase().contains(&needle)
                        || i.category().to_lowercase().contains(&needle))
            })
            .collect();
        sort_by_category_then_name(&mut items);
        items
    }

    fn set_availability(&mut self, id: MenuItemId, available: bool) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id_typed() == id) {
            item.set_availability(available);
        }
    }
}

fn sort_by_category_then_name(items: &mut [&MenuItem]) {
    items.sort_by(|a, b| {
        a.category()
            .cmp(b.category())
            .then_with(|| a.name().cmp(b.name()))
    });
}
