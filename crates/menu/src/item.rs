use serde::{Deserialize, Serialize};

use mealflow_core::{DomainError, DomainResult, Entity, MenuItemId};

/// Fallback preparation estimate when none (or zero) is given.
pub const DEFAULT_PREP_MINUTES: u32 = 15;

/// A dish on the menu.
///
/// Availability is the only field that changes after construction, and it is
/// toggled by catalog administration, never by order processing. Orders
/// snapshot the item at the moment of addition, so a later toggle does not
/// affect existing order lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    description: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    category: String,
    prep_minutes: u32,
    available: bool,
}

impl MenuItem {
    /// Create a menu item, available by default.
    ///
    /// `price` is in smallest currency unit (cents), so negative prices are
    /// unrepresentable. A zero `prep_minutes` is normalized to
    /// [`DEFAULT_PREP_MINUTES`].
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        prep_minutes: u32,
    ) -> DomainResult<Self> {
        Self::with_id(MenuItemId::new(), name, description, price, category, prep_minutes)
    }

    /// Create a menu item with an explicit id (useful for deterministic tests).
    pub fn with_id(
        id: MenuItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        prep_minutes: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let prep_minutes = if prep_minutes == 0 {
            DEFAULT_PREP_MINUTES
        } else {
            prep_minutes
        };

        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            category: category.into(),
            prep_minutes,
            available: true,
        })
    }

    pub fn id_typed(&self) -> MenuItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price in smallest currency unit (e.g., cents).
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn prep_minutes(&self) -> u32 {
        self.prep_minutes
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Toggle availability. Catalog administration only.
    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }
}

impl Entity for MenuItem {
    type Id = MenuItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
