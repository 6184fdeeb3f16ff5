use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One entry of an order's audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderNote {
    pub content: String,
    pub added_at: DateTime<Utc>,
}

/// Represents a store order as seen by the tracking component.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for the
/// actions it accepts ([`OrderAction`](crate::order_actor::OrderAction)).
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    /// Number shown to the customer; the host defaults it to the id.
    pub number: String,
    pub billing_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub meta: BTreeMap<String, String>,
    pub notes: Vec<OrderNote>,
}

/// Payload the host uses to place an order.
#[derive(Debug, Clone, Default)]
pub struct OrderCreate {
    pub number: Option<String>,
    pub billing_email: Option<String>,
}

impl Order {
    /// Creates an order with no metadata and an empty note log.
    ///
    /// A missing `number` falls back to the id, like the host does.
    pub fn new(id: OrderId, number: Option<String>, billing_email: Option<String>) -> Self {
        Self {
            id,
            number: number.unwrap_or_else(|| id.to_string()),
            billing_email,
            created_at: Utc::now(),
            meta: BTreeMap::new(),
            notes: Vec::new(),
        }
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Billing address if it holds anything besides whitespace.
    pub fn recipient(&self) -> Option<&str> {
        self.billing_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}
