use chrono::{DateTime, Utc};
use retouch_catalog::Selection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of the cart: a service with a variation selection and the
/// unit price that selection resolved to when it was added
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub selection: Selection,
    pub unit_price: f64,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(
        service_id: Uuid,
        service_name: String,
        selection: Selection,
        unit_price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_id,
            service_name,
            selection,
            unit_price,
            quantity,
            added_at: Utc::now(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    /// Whether this line was priced for the given service and selection
    pub fn matches(&self, service_id: Uuid, selection: &Selection) -> bool {
        self.service_id == service_id && self.selection == *selection
    }
}

/// The shopper's cart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
