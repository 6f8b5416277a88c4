use chrono::{DateTime, Utc};
use seqkit::{HasCreated, HasDates, Identifiable};

/// A customer order awaiting reconciliation against incoming payments.
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub total_cents: i64,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl Order {
    pub fn new(customer: impl Into<String>, total_cents: i64) -> Self {
        Order {
            customer: customer.into(),
            total_cents,
            ..Order::default()
        }
    }
}

impl Identifiable for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }
}

impl HasCreated for Order {
    fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }

    fn set_created_utc(&mut self, at: DateTime<Utc>) {
        self.created_utc = at;
    }
}

impl HasDates for Order {
    fn updated_utc(&self) -> DateTime<Utc> {
        self.updated_utc
    }

    fn set_updated_utc(&mut self, at: DateTime<Utc>) {
        self.updated_utc = at;
    }
}

/// A payment reported by the processor, keyed back to an order.
#[derive(Debug, Clone)]
pub struct Payment {
    pub order_id: String,
    pub amount_cents: i64,
}

impl Payment {
    pub fn new(order_id: impl Into<String>, amount_cents: i64) -> Self {
        Payment {
            order_id: order_id.into(),
            amount_cents,
        }
    }
}
