//! Order lifecycle notifications (observer broadcast).
//!
//! Broadcasting is synchronous and in subscription order: a notification is
//! delivered on the same call stack as the mutation that triggered it, so
//! listeners observe events in exactly the order the mutations happened.

use std::sync::{Arc, Mutex};

use mealflow_menu::MenuItem;

use crate::order::{Order, OrderStatus};

/// A party interested in order lifecycle events.
///
/// All three callbacks default to no-ops, so a listener only implements the
/// slots it cares about.
pub trait OrderObserver: Send + Sync {
    fn on_created(&self, order: &Order) {
        let _ = order;
    }

    fn on_status_changed(&self, order: &Order, old: OrderStatus, new: OrderStatus) {
        let _ = (order, old, new);
    }

    fn on_item_added(&self, order: &Order, item: &MenuItem) {
        let _ = (order, item);
    }
}

/// Broadcast hub over an ordered, duplicate-free set of observers.
///
/// Observer identity is the `Arc` allocation: subscribing the same `Arc`
/// twice is a no-op, and unsubscribing removes exactly that allocation.
#[derive(Default)]
pub struct OrderNotifier {
    observers: Vec<Arc<dyn OrderObserver>>,
}

impl OrderNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; no-op if it is already subscribed.
    pub fn subscribe(&mut self, observer: Arc<dyn OrderObserver>) {
        if !self.observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            self.observers.push(observer);
        }
    }

    /// Remove an observer; no-op if it was never subscribed.
    pub fn unsubscribe(&mut self, observer: &Arc<dyn OrderObserver>) {
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
    }

    pub fn notify_created(&self, order: &Order) {
        for observer in &self.observers {
            observer.on_created(order);
        }
    }

    pub fn notify_status_changed(&self, order: &Order, old: OrderStatus, new: OrderStatus) {
        for observer in &self.observers {
            observer.on_status_changed(order, old, new);
        }
    }

    pub fn notify_item_added(&self, order: &Order, item: &MenuItem) {
        for observer in &self.observers {
            observer.on_item_added(order, item);
        }
    }
}

impl core::fmt::Debug for OrderNotifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Reference observer: appends a human-readable line per event.
///
/// Useful for inspection in tests and as the registry's default listener.
#[derive(Debug, Default)]
pub struct OrderLog {
    lines: Mutex<Vec<String>>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines.
    pub fn entries(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            // A poisoned log yields nothing rather than panicking.
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl OrderObserver for OrderLog {
    fn on_created(&self, order: &Order) {
        self.push(format!(
            "Order created: {} for {}",
            order.id_typed(),
            order.customer().name()
        ));
    }

    fn on_status_changed(&self, order: &Order, old: OrderStatus, new: OrderStatus) {
        self.push(format!("Order {}: {:?} -> {:?}", order.id_typed(), old, new));
    }

    fn on_item_added(&self, order: &Order, item: &MenuItem) {
        self.push(format!(
            "Item added to order {}: {}",
            order.id_typed(),
            item.name()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderKind;
    use mealflow_customers::Customer;

    fn test_order() -> Order {
        let customer = Arc::new(
            Customer::new("Alice Carter", "alice@example.com", "+15550100", "12 Oak Lane")
                .unwrap(),
        );
        Order::new(customer, OrderKind::Standard)
    }

    fn pizza() -> MenuItem {
        MenuItem::new("Margherita", "Classic", 1299, "Pizza", 20).unwrap()
    }

    /// Records which tag saw which event, into a list shared across observers.
    struct TaggedRecorder {
        tag: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl OrderObserver for TaggedRecorder {
        fn on_created(&self, _order: &Order) {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(format!("{}:created", self.tag));
            }
        }

        fn on_status_changed(&self, _order: &Order, old: OrderStatus, new: OrderStatus) {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(format!("{}:{:?}->{:?}", self.tag, old, new));
            }
        }
    }

    #[test]
    fn broadcasts_reach_observers_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::new(TaggedRecorder {
            tag: "first",
            seen: Arc::clone(&seen),
        });
        let second = Arc::new(TaggedRecorder {
            tag: "second",
            seen: Arc::clone(&seen),
        });

        let mut notifier = OrderNotifier::new();
        notifier.subscribe(first);
        notifier.subscribe(second);

        notifier.notify_created(&test_order());

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec!["first:created", "second:created"]);
    }

    #[test]
    fn duplicate_subscribe_is_a_no_op() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder: Arc<dyn OrderObserver> = Arc::new(TaggedRecorder {
            tag: "only",
            seen: Arc::clone(&seen),
        });

        let mut notifier = OrderNotifier::new();
        notifier.subscribe(Arc::clone(&recorder));
        notifier.subscribe(Arc::clone(&recorder));

        notifier.notify_created(&test_order());
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn unsubscribed_observers_stop_receiving_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder: Arc<dyn OrderObserver> = Arc::new(TaggedRecorder {
            tag: "gone",
            seen: Arc::clone(&seen),
        });

        let mut notifier = OrderNotifier::new();
        notifier.subscribe(Arc::clone(&recorder));
        notifier.unsubscribe(&recorder);

        notifier.notify_created(&test_order());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn observers_may_implement_only_some_slots() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::new(TaggedRecorder {
            tag: "partial",
            seen: Arc::clone(&seen),
        });

        let mut notifier = OrderNotifier::new();
        notifier.subscribe(recorder);

        // TaggedRecorder leaves on_item_added as the default no-op.
        notifier.notify_item_added(&test_order(), &pizza());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn order_log_records_human_readable_lines() {
        let log = Arc::new(OrderLog::new());
        let mut notifier = OrderNotifier::new();
        notifier.subscribe(Arc::clone(&log) as Arc<dyn OrderObserver>);

        let mut order = test_order();
        notifier.notify_created(&order);
        notifier.notify_item_added(&order, &pizza());

        let old = order.status();
        order.update_status(OrderStatus::Preparing);
        notifier.notify_status_changed(&order, old, OrderStatus::Preparing);

        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].contains("Order created"));
        assert!(entries[0].contains("Alice Carter"));
        assert!(entries[1].contains("Margherita"));
        assert!(entries[2].contains("Created -> Preparing"));
    }
}
