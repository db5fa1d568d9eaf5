use crate::models::{Cart, CartItem};
use chrono::Utc;
use retouch_catalog::{resolve_price, Selection, Service};
use uuid::Uuid;

/// Reconciles cart lines as the shopper adds and adjusts services
pub struct CartManager {
    cart: Cart,
}

impl CartManager {
    pub fn new() -> Self {
        Self { cart: Cart::new() }
    }

    pub fn with_cart(cart: Cart) -> Self {
        Self { cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn into_cart(self) -> Cart {
        self.cart
    }

    /// Add a service with the given selection.
    ///
    /// If a line for the same service with an identical selection
    /// already exists, its quantity is bumped instead of opening a new
    /// line; the unit price is resolved from the service's current
    /// combinations either way. Returns the id of the affected line.
    pub fn add(
        &mut self,
        service: &Service,
        selection: Selection,
        quantity: u32,
    ) -> Result<Uuid, CartError> {
        if !service.is_active {
            return Err(CartError::ServiceUnavailable(service.name.clone()));
        }
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let unit_price = resolve_price(service, &selection);

        let id = if let Some(item) = self
            .cart
            .items
            .iter_mut()
            .find(|i| i.matches(service.id, &selection))
        {
            item.quantity += quantity;
            item.unit_price = unit_price;
            item.id
        } else {
            let item = CartItem::new(
                service.id,
                service.name.clone(),
                selection,
                unit_price,
                quantity,
            );
            let id = item.id;
            self.cart.items.push(item);
            id
        };

        self.touch();
        Ok(id)
    }

    pub fn set_quantity(&mut self, item_id: Uuid, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let item = self
            .cart
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(CartError::ItemNotFound(item_id))?;

        item.quantity = quantity;
        self.touch();
        Ok(())
    }

    pub fn remove(&mut self, item_id: Uuid) -> Result<(), CartError> {
        let before = self.cart.items.len();
        self.cart.items.retain(|i| i.id != item_id);
        if self.cart.items.len() == before {
            return Err(CartError::ItemNotFound(item_id));
        }
        self.touch();
        Ok(())
    }

    /// Re-resolve unit prices against freshly fetched service documents;
    /// lines whose service is absent are left untouched
    pub fn reprice(&mut self, services: &[Service]) {
        for item in &mut self.cart.items {
            if let Some(service) = services.iter().find(|s| s.id == item.service_id) {
                item.unit_price = resolve_price(service, &item.selection);
            }
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.cart.updated_at = Some(Utc::now());
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("service is not available: {0}")]
    ServiceUnavailable(String),
}
