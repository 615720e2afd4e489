//! Orders domain module — the order lifecycle core.
//!
//! This crate contains the order aggregate and the components that
//! collaborate on its lifecycle: the builder that assembles orders, the
//! pricer that totals them, the notifier that broadcasts lifecycle events,
//! and the registry service that coordinates all of them. Implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod builder;
pub mod notify;
pub mod order;
pub mod pricing;
pub mod service;

pub use builder::OrderBuilder;
pub use notify::{OrderLog, OrderNotifier, OrderObserver};
pub use order::{Order, OrderKind, OrderStatus};
pub use pricing::{
    EXPRESS_DELIVERY_FEE, OrderPricer, STANDARD_DELIVERY_FEE, base_price,
};
pub use service::OrderService;
