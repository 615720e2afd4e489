use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mealflow_core::{Entity, MenuItemId, OrderId};
use mealflow_customers::Customer;
use mealflow_menu::MenuItem;

/// Preparation overhead added on top of the slowest dish, in minutes.
///
/// Express orders get priority handling, hence the smaller overhead.
pub const EXPRESS_OVERHEAD_MINUTES: u32 = 15;
pub const STANDARD_OVERHEAD_MINUTES: u32 = 30;

/// Order kind, fixed at construction. Drives both pricing and the
/// preparation-time overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Standard,
    Express,
}

impl Default for OrderKind {
    fn default() -> Self {
        OrderKind::Standard
    }
}

/// Order status lifecycle.
///
/// The expected path is Created → Preparing → ReadyForDelivery →
/// OutForDelivery → Delivered, with Cancelled reachable from any
/// non-terminal state. Transition legality is deliberately NOT enforced:
/// the registry's update operation may set any status from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Created,
    Preparing,
    ReadyForDelivery,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Delivered and Cancelled are terminal: no further transition is
    /// expected, though none is enforced.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Aggregate root: a customer's order.
///
/// Line items are snapshots taken at the moment of addition; insertion
/// order is display order and duplicates are permitted. Orders are never
/// deleted, they only reach a terminal status.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    customer: Arc<Customer>,
    items: Vec<MenuItem>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    special_instructions: Option<String>,
    kind: OrderKind,
}

impl Order {
    /// Create an empty order in `Created` status, stamping creation time.
    pub fn new(customer: Arc<Customer>, kind: OrderKind) -> Self {
        Self {
            id: OrderId::new(),
            customer,
            items: Vec::new(),
            status: OrderStatus::Created,
            created_at: Utc::now(),
            updated_at: None,
            special_instructions: None,
            kind,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    /// Append an item, but only if it is available right now.
    ///
    /// Unavailable items are silently rejected — a policy no-op, not an
    /// error. Callers depend on this contract.
    pub fn add_item(&mut self, item: &MenuItem) {
        if item.is_available() {
            self.items.push(item.clone());
        }
    }

    /// Remove the first line matching the given item id; no-op if absent.
    pub fn remove_item(&mut self, id: MenuItemId) {
        if let Some(pos) = self.items.iter().position(|i| i.id_typed() == id) {
            self.items.remove(pos);
        }
    }

    /// Unconditionally set the status and stamp the update time.
    ///
    /// No transition legality is validated (any-to-any by design).
    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
        self.updated_at = Some(Utc::now());
    }

    pub fn set_special_instructions(&mut self, instructions: impl Into<String>) {
        self.special_instructions = Some(instructions.into());
    }

    /// Estimated preparation time in minutes.
    ///
    /// Preparation is dominated by the slowest dish cooked in parallel, so
    /// this is the maximum (not the sum) across line items, plus a fixed
    /// overhead by order kind. An empty order is just the overhead.
    pub fn estimate_preparation_time(&self) -> u32 {
        let slowest = self.items.iter().map(|i| i.prep_minutes()).max().unwrap_or(0);
        match self.kind {
            OrderKind::Express => slowest + EXPRESS_OVERHEAD_MINUTES,
            OrderKind::Standard => slowest + STANDARD_OVERHEAD_MINUTES,
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_customer() -> Arc<Customer> {
        Arc::new(
            Customer::new("Alice Carter", "alice@example.com", "+15550100", "12 Oak Lane")
                .unwrap(),
        )
    }

    fn pizza() -> MenuItem {
        MenuItem::new("Margherita", "Classic", 1299, "Pizza", 20).unwrap()
    }

    fn espresso() -> MenuItem {
        MenuItem::new("Espresso", "Double shot", 249, "Drinks", 5).unwrap()
    }

    #[test]
    fn new_order_starts_created_with_no_items() {
        let order = Order::new(test_customer(), OrderKind::Standard);
        assert_eq!(order.status(), OrderStatus::Created);
        assert!(order.items().is_empty());
        assert!(order.updated_at().is_none());
        assert_eq!(order.kind(), OrderKind::Standard);
    }

    #[test]
    fn add_item_appends_available_items_in_order() {
        let mut order = Order::new(test_customer(), OrderKind::Standard);
        order.add_item(&pizza());
        order.add_item(&espresso());

        let names: Vec<&str> = order.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Margherita", "Espresso"]);
    }

    #[test]
    fn add_item_silently_rejects_unavailable_items() {
        let mut unavailable = pizza();
        unavailable.set_availability(false);

        let mut order = Order::new(test_customer(), OrderKind::Standard);
        order.add_item(&unavailable);
        assert!(order.items().is_empty());
    }

    #[test]
    fn duplicate_items_are_permitted() {
        let item = pizza();
        let mut order = Order::new(test_customer(), OrderKind::Standard);
        order.add_item(&item);
        order.add_item(&item);
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn remove_item_removes_first_match_only() {
        let item = pizza();
        let mut order = Order::new(test_customer(), OrderKind::Standard);
        order.add_item(&item);
        order.add_item(&item);

        order.remove_item(item.id_typed());
        assert_eq!(order.items().len(), 1);

        // Unknown id is a no-op.
        order.remove_item(MenuItemId::new());
        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn update_status_stamps_update_time() {
        let mut order = Order::new(test_customer(), OrderKind::Standard);
        assert!(order.updated_at().is_none());

        order.update_status(OrderStatus::Preparing);
        assert_eq!(order.status(), OrderStatus::Preparing);
        assert!(order.updated_at().is_some());
    }

    #[test]
    fn status_updates_are_not_validated() {
        let mut order = Order::new(test_customer(), OrderKind::Standard);
        order.update_status(OrderStatus::Delivered);
        // Even a terminal status can be left again; legality is the
        // caller's concern.
        order.update_status(OrderStatus::Created);
        assert_eq!(order.status(), OrderStatus::Created);
    }

    #[test]
    fn terminal_statuses_are_delivered_and_cancelled() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Created.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
    }

    #[test]
    fn preparation_time_is_max_plus_overhead() {
        let mut order = Order::new(test_customer(), OrderKind::Standard);
        order.add_item(&pizza()); // 20 min
        order.add_item(&espresso()); // 5 min
        assert_eq!(order.estimate_preparation_time(), 20 + STANDARD_OVERHEAD_MINUTES);
    }

    #[test]
    fn express_orders_get_smaller_overhead() {
        let mut order = Order::new(test_customer(), OrderKind::Express);
        order.add_item(&pizza());
        assert_eq!(order.estimate_preparation_time(), 20 + EXPRESS_OVERHEAD_MINUTES);
    }

    #[test]
    fn empty_order_preparation_time_is_just_the_overhead() {
        let order = Order::new(test_customer(), OrderKind::Standard);
        assert_eq!(order.estimate_preparation_time(), STANDARD_OVERHEAD_MINUTES);
    }

    #[test]
    fn items_snapshot_availability_at_addition_time() {
        let mut item = pizza();
        let mut order = Order::new(test_customer(), OrderKind::Standard);
        order.add_item(&item);

        // Toggling the source item later does not touch the order line.
        item.set_availability(false);
        assert_eq!(order.items().len(), 1);
        assert!(order.items()[0].is_available());
    }
}
