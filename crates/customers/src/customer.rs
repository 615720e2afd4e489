use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mealflow_core::{CustomerId, DomainError, DomainResult, Entity};

/// A registered customer.
///
/// Customers are immutable after construction and have no lifecycle beyond
/// it. They are shared (not exclusively owned) by orders: wrap in an
/// `Arc` when handing one to the order layer so the same customer can
/// appear on multiple orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    phone: String,
    address: String,
    registered_at: DateTime<Utc>,
}

impl Customer {
    /// Create a customer, stamping the registration time.
    ///
    /// All four fields are required; a blank (empty or whitespace-only)
    /// value fails loudly so callers never receive a partially-built
    /// customer.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_id(CustomerId::new(), name, email, phone, address)
    }

    /// Create a customer with an explicit id (useful for deterministic tests).
    pub fn with_id(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();
        let address = address.into();

        for (field, value) in [
            ("name", &name),
            ("email", &email),
            ("phone", &phone),
            ("address", &address),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} cannot be empty")));
            }
        }

        Ok(Self {
            id,
            name,
            email,
            phone,
            address,
            registered_at: Utc::now(),
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
