use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One selectable value along a variation axis (e.g. "Large")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariationOption {
    pub name: String,
    pub description: Option<String>,
}

impl VariationOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// A named customization axis of a service (e.g. "Size")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariationType {
    pub name: String,
    pub options: Vec<VariationOption>,
    /// Whether this axis participates in price-combination generation
    pub required: bool,
}

impl VariationType {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            required,
        }
    }

    /// Option names in stored order
    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name.as_str()).collect()
    }
}

/// A priced point in the combination space: one option per required axis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceCombination {
    /// Option names, one per required axis, stored in axis order.
    /// Matched as a set at resolution time.
    pub combination: Vec<String>,
    pub price: f64,
    pub description: Option<String>,
}

impl PriceCombination {
    /// An unpriced draft produced by the generator; the administrator
    /// fills in the price before saving.
    pub fn draft(combination: Vec<String>) -> Self {
        Self {
            combination,
            price: 0.0,
            description: None,
        }
    }
}

/// A purchasable service document as persisted by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Fallback price when no combination matches or no axis is required
    pub base_price: f64,
    #[serde(default)]
    pub variation_types: Vec<VariationType>,
    #[serde(default)]
    pub price_combinations: Vec<PriceCombination>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Service {
    pub fn new(name: impl Into<String>, base_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            base_price,
            variation_types: Vec::new(),
            price_combinations: Vec::new(),
            is_active: true,
        }
    }

    /// Whether any axis participates in pricing; when false, every
    /// selection resolves to the base price
    pub fn has_required_types(&self) -> bool {
        self.variation_types.iter().any(|t| t.required)
    }
}
