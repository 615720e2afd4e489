//! Menu catalog domain module.
//!
//! This crate contains the menu item entity and the catalog interface the
//! order core consumes, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod catalog;
pub mod item;

pub use catalog::{Catalog, MenuCatalog};
pub use item::{DEFAULT_PREP_MINUTES, MenuItem};
