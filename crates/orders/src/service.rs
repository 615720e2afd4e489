//! Order registry: the single entry point coordinating assembly, pricing,
//! and notification.

use std::sync::Arc;

use mealflow_core::{DomainResult, OrderId};
use mealflow_customers::Customer;
use mealflow_menu::MenuItem;

use crate::builder::OrderBuilder;
use crate::notify::{OrderLog, OrderNotifier, OrderObserver};
use crate::order::{Order, OrderKind, OrderStatus};
use crate::pricing::OrderPricer;

/// Owns the canonical order collection and one notifier.
///
/// All mutations go through this service so that every mutation fires its
/// corresponding notification on the same call stack (call order = event
/// order). Construct one explicitly and pass it where needed; there is no
/// hidden global instance.
#[derive(Debug)]
pub struct OrderService {
    orders: Vec<Order>,
    notifier: OrderNotifier,
}

impl OrderService {
    /// A registry with one [`OrderLog`] pre-subscribed — a convenience
    /// default, not a requirement. Use [`OrderService::with_notifier`] to
    /// start from an empty subscription set.
    pub fn new() -> Self {
        let mut notifier = OrderNotifier::new();
        notifier.subscribe(Arc::new(OrderLog::new()));
        Self::with_notifier(notifier)
    }

    pub fn with_notifier(notifier: OrderNotifier) -> Self {
        Self {
            orders: Vec::new(),
            notifier,
        }
    }

    /// Register an observer for subsequent lifecycle events.
    pub fn subscribe(&mut self, observer: Arc<dyn OrderObserver>) {
        self.notifier.subscribe(observer);
    }

    pub fn unsubscribe(&mut self, observer: &Arc<dyn OrderObserver>) {
        self.notifier.unsubscribe(observer);
    }

    /// Store an already-built order and fire the created event.
    pub fn add_order(&mut self, order: Order) -> OrderId {
        let id = order.id_typed();
        tracing::info!(order_id = %id, customer = order.customer().name(), "order created");
        self.notifier.notify_created(&order);
        self.orders.push(order);
        id
    }

    /// Assemble an order through the builder, store it, and fire the
    /// created event. Items pass the usual availability filter.
    pub fn create_order(
        &mut self,
        customer: Arc<Customer>,
        kind: OrderKind,
        items: &[MenuItem],
    ) -> DomainResult<OrderId> {
        let mut builder = OrderBuilder::new().customer(customer);
        if kind == OrderKind::Express {
            builder = builder.express();
        }
        let order = builder.items(items).build()?;
        Ok(self.add_order(order))
    }

    /// Lookup by id. Unknown ids are not an error.
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id_typed() == id)
    }

    /// Total in cents for the kind-matched pricing variant.
    ///
    /// An unknown id yields 0 — a long-standing policy choice, preserved
    /// because callers rely on it.
    pub fn calculate_total(&self, id: OrderId) -> u64 {
        match self.get_order(id) {
            Some(order) => OrderPricer::for_kind(order.kind()).total(order),
            None => 0,
        }
    }

    /// Set the status (any-to-any, unvalidated) and fire the status-changed
    /// event with the old/new pair. Silent no-op when the order is unknown.
    pub fn update_status(&mut self, id: OrderId, new_status: OrderStatus) {
        let Some(idx) = self.orders.iter().position(|o| o.id_typed() == id) else {
            return;
        };

        let old_status = self.orders[idx].status();
        self.orders[idx].update_status(new_status);
        tracing::info!(
            order_id = %id,
            from = ?old_status,
            to = ?new_status,
            "order status updated"
        );
        self.notifier
            .notify_status_changed(&self.orders[idx], old_status, new_status);
    }

    /// Add an item to an order still in `Created` status.
    ///
    /// Returns `false` without mutation when the order is unknown or has
    /// already moved past `Created` — a guard against modifying an order
    /// in preparation. Not an error: callers depend on the bool contract.
    pub fn add_item_to_order(&mut self, id: OrderId, item: &MenuItem) -> bool {
        let Some(idx) = self.orders.iter().position(|o| o.id_typed() == id) else {
            return false;
        };
        if self.orders[idx].status() != OrderStatus::Created {
            return false;
        }

        self.orders[idx].add_item(item);
        tracing::debug!(order_id = %id, item = item.name(), "item added to order");
        self.notifier.notify_item_added(&self.orders[idx], item);
        true
    }

    /// Orders currently in the given status, in creation order.
    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status() == status).collect()
    }

    /// All orders, latest created first.
    pub fn all_orders(&self) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.iter().collect();
        orders.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        orders
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}
