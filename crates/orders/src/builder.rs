use std::sync::Arc;

use mealflow_core::{DomainError, DomainResult};
use mealflow_customers::Customer;
use mealflow_menu::MenuItem;

use crate::order::{Order, OrderKind};

/// Incremental order assembly with chained setters.
///
/// A builder produces exactly one order: `build()` consumes it, so the
/// buffered state cannot leak into a second order. Items buffered here pass
/// through the same availability filter as [`Order::add_item`].
///
/// ```
/// # use std::sync::Arc;
/// # use mealflow_customers::Customer;
/// # use mealflow_menu::MenuItem;
/// # use mealflow_orders::{OrderBuilder, OrderKind};
/// let customer = Arc::new(
///     Customer::new("Alice", "alice@example.com", "+15550100", "12 Oak Lane").unwrap(),
/// );
/// let pizza = MenuItem::new("Margherita", "Classic", 1299, "Pizza", 20).unwrap();
///
/// let order = OrderBuilder::new()
///     .customer(customer)
///     .express()
///     .item(&pizza)
///     .build()
///     .unwrap();
/// assert_eq!(order.kind(), OrderKind::Express);
/// ```
#[derive(Debug, Default)]
pub struct OrderBuilder {
    customer: Option<Arc<Customer>>,
    kind: OrderKind,
    items: Vec<MenuItem>,
    special_instructions: Option<String>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the customer. Required: building without one fails.
    pub fn customer(mut self, customer: Arc<Customer>) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Mark the order Express (default is Standard).
    pub fn express(mut self) -> Self {
        self.kind = OrderKind::Express;
        self
    }

    /// Buffer one item, silently skipping it when unavailable.
    pub fn item(mut self, item: &MenuItem) -> Self {
        if item.is_available() {
            self.items.push(item.clone());
        }
        self
    }

    /// Buffer many items, each passing the availability filter.
    pub fn items<'a>(mut self, items: impl IntoIterator<Item = &'a MenuItem>) -> Self {
        for item in items {
            self = self.item(item);
        }
        self
    }

    pub fn special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    /// Validate and produce the order.
    ///
    /// Fails loudly when no customer was set; the caller never receives a
    /// partially-built order.
    pub fn build(self) -> DomainResult<Order> {
        let customer = self
            .customer
            .ok_or_else(|| DomainError::validation("customer is required"))?;

        let mut order = Order::new(customer, self.kind);
        for item in &self.items {
            order.add_item(item);
        }
        if let Some(instructions) = self.special_instructions {
            order.set_special_instructions(instructions);
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;

    fn test_customer() -> Arc<Customer> {
        Arc::new(
            Customer::new("Alice Carter", "alice@example.com", "+15550100", "12 Oak Lane")
                .unwrap(),
        )
    }

    fn pizza() -> MenuItem {
        MenuItem::new("Margherita", "Classic", 1299, "Pizza", 20).unwrap()
    }

    #[test]
    fn build_without_customer_fails() {
        let err = OrderBuilder::new().item(&pizza()).build().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("customer")),
            _ => panic!("Expected Validation error for missing customer"),
        }
    }

    #[test]
    fn default_kind_is_standard() {
        let order = OrderBuilder::new().customer(test_customer()).build().unwrap();
        assert_eq!(order.kind(), OrderKind::Standard);
        assert_eq!(order.status(), OrderStatus::Created);
    }

    #[test]
    fn express_builder_yields_express_order_with_its_items() {
        let order = OrderBuilder::new()
            .customer(test_customer())
            .express()
            .item(&pizza())
            .build()
            .unwrap();

        assert_eq!(order.kind(), OrderKind::Express);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].name(), "Margherita");
    }

    #[test]
    fn unavailable_items_are_filtered_while_buffering() {
        let mut unavailable = pizza();
        unavailable.set_availability(false);

        let available = pizza();
        let order = OrderBuilder::new()
            .customer(test_customer())
            .items(vec![&available, &unavailable])
            .build()
            .unwrap();

        assert_eq!(order.items().len(), 1);
    }

    #[test]
    fn special_instructions_are_carried_onto_the_order() {
        let order = OrderBuilder::new()
            .customer(test_customer())
            .special_instructions("Ring twice")
            .build()
            .unwrap();
        assert_eq!(order.special_instructions(), Some("Ring twice"));
    }
}
