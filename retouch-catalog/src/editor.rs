use crate::combinations::{CombinationError, CombinationGenerator};
use crate::service::{PriceCombination, Service, VariationOption, VariationType};

/// Transient editing state for a service's variation axes and price
/// combinations.
///
/// Mirrors the admin workflow: axes and combinations are built up in
/// memory and written back to the service document only on an explicit
/// save. Nothing here touches the network.
pub struct ServiceEditor {
    variation_types: Vec<VariationType>,
    price_combinations: Vec<PriceCombination>,
    generator: CombinationGenerator,
}

impl ServiceEditor {
    pub fn new(generator: CombinationGenerator) -> Self {
        Self {
            variation_types: Vec::new(),
            price_combinations: Vec::new(),
            generator,
        }
    }

    /// Start from a service's persisted state
    pub fn for_service(service: &Service, generator: CombinationGenerator) -> Self {
        Self {
            variation_types: service.variation_types.clone(),
            price_combinations: service.price_combinations.clone(),
            generator,
        }
    }

    pub fn variation_types(&self) -> &[VariationType] {
        &self.variation_types
    }

    pub fn price_combinations(&self) -> &[PriceCombination] {
        &self.price_combinations
    }

    /// Add a new variation axis; axis names are unique per service
    pub fn add_variation_type(
        &mut self,
        name: impl Into<String>,
        required: bool,
    ) -> Result<(), EditorError> {
        let name = name.into();
        if self.variation_types.iter().any(|vt| vt.name == name) {
            return Err(EditorError::DuplicateAxis(name));
        }
        self.variation_types.push(VariationType::new(name, required));
        Ok(())
    }

    pub fn remove_variation_type(&mut self, name: &str) -> Result<(), EditorError> {
        let before = self.variation_types.len();
        self.variation_types.retain(|vt| vt.name != name);
        if self.variation_types.len() == before {
            return Err(EditorError::UnknownAxis(name.to_string()));
        }
        Ok(())
    }

    pub fn set_required(&mut self, name: &str, required: bool) -> Result<(), EditorError> {
        self.axis_mut(name)?.required = required;
        Ok(())
    }

    pub fn add_option(
        &mut self,
        axis: &str,
        option: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EditorError> {
        let option = option.into();
        let vt = self.axis_mut(axis)?;
        vt.options.push(VariationOption {
            name: option,
            description,
        });
        Ok(())
    }

    pub fn remove_option(&mut self, axis: &str, option: &str) -> Result<(), EditorError> {
        let vt = self.axis_mut(axis)?;
        let before = vt.options.len();
        vt.options.retain(|o| o.name != option);
        if vt.options.len() == before {
            return Err(EditorError::UnknownOption {
                axis: axis.to_string(),
                option: option.to_string(),
            });
        }
        Ok(())
    }

    /// Regenerate draft combinations from the current axes, replacing
    /// whatever combinations were held before
    pub fn generate_combinations(&mut self) -> Result<usize, EditorError> {
        self.price_combinations = self.generator.drafts(&self.variation_types)?;
        Ok(self.price_combinations.len())
    }

    pub fn set_price(&mut self, index: usize, price: f64) -> Result<(), EditorError> {
        if price < 0.0 || price.is_nan() {
            return Err(EditorError::InvalidPrice(price));
        }
        self.combination_mut(index)?.price = price;
        Ok(())
    }

    pub fn set_combination_description(
        &mut self,
        index: usize,
        description: Option<String>,
    ) -> Result<(), EditorError> {
        self.combination_mut(index)?.description = description;
        Ok(())
    }

    /// Write the edited state back onto the service document
    pub fn apply_to(self, service: &mut Service) {
        service.variation_types = self.variation_types;
        service.price_combinations = self.price_combinations;
    }

    fn axis_mut(&mut self, name: &str) -> Result<&mut VariationType, EditorError> {
        self.variation_types
            .iter_mut()
            .find(|vt| vt.name == name)
            .ok_or_else(|| EditorError::UnknownAxis(name.to_string()))
    }

    fn combination_mut(&mut self, index: usize) -> Result<&mut PriceCombination, EditorError> {
        let len = self.price_combinations.len();
        self.price_combinations
            .get_mut(index)
            .ok_or(EditorError::CombinationOutOfRange { index, len })
    }
}

impl Default for ServiceEditor {
    fn default() -> Self {
        Self::new(CombinationGenerator::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("variation type already exists: {0}")]
    DuplicateAxis(String),

    #[error("variation type not found: {0}")]
    UnknownAxis(String),

    #[error("option not found on {axis}: {option}")]
    UnknownOption { axis: String, option: String },

    #[error("combination index {index} out of range ({len} combinations)")]
    CombinationOutOfRange { index: usize, len: usize },

    #[error("price must be non-negative, got {0}")]
    InvalidPrice(f64),

    #[error(transparent)]
    Generation(#[from] CombinationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::GeneratorConfig;

    #[test]
    fn test_editing_lifecycle() {
        let mut editor = ServiceEditor::default();

        editor.add_variation_type("Size", true).unwrap();
        editor.add_option("Size", "S", None).unwrap();
        editor.add_option("Size", "M", None).unwrap();
        editor.add_variation_type("Color", true).unwrap();
        editor.add_option("Color", "Red", None).unwrap();
        editor.add_option("Color", "Blue", None).unwrap();

        let generated = editor.generate_combinations().unwrap();
        assert_eq!(generated, 4);

        editor.set_price(0, 10.0).unwrap();
        editor
            .set_combination_description(0, Some("Small red".to_string()))
            .unwrap();

        let mut service = Service::new("Photo Restoration", 5.0);
        editor.apply_to(&mut service);

        assert_eq!(service.price_combinations.len(), 4);
        assert_eq!(service.price_combinations[0].price, 10.0);
        // Remaining drafts stay unpriced until the admin fills them in
        assert_eq!(service.price_combinations[1].price, 0.0);
    }

    #[test]
    fn test_duplicate_axis_rejected() {
        let mut editor = ServiceEditor::default();
        editor.add_variation_type("Size", true).unwrap();

        let err = editor.add_variation_type("Size", false).unwrap_err();
        assert!(matches!(err, EditorError::DuplicateAxis(name) if name == "Size"));
    }

    #[test]
    fn test_unknown_axis_and_option() {
        let mut editor = ServiceEditor::default();
        assert!(matches!(
            editor.add_option("Size", "S", None),
            Err(EditorError::UnknownAxis(_))
        ));

        editor.add_variation_type("Size", true).unwrap();
        assert!(matches!(
            editor.remove_option("Size", "S"),
            Err(EditorError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_regeneration_replaces_previous_combinations() {
        let mut editor = ServiceEditor::default();
        editor.add_variation_type("Size", true).unwrap();
        editor.add_option("Size", "S", None).unwrap();
        editor.add_option("Size", "M", None).unwrap();

        editor.generate_combinations().unwrap();
        editor.set_price(0, 3.0).unwrap();

        editor.add_option("Size", "L", None).unwrap();
        let count = editor.generate_combinations().unwrap();

        assert_eq!(count, 3);
        // Regeneration discards the earlier pricing
        assert!(editor.price_combinations().iter().all(|c| c.price == 0.0));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut editor = ServiceEditor::default();
        editor.add_variation_type("Size", true).unwrap();
        editor.add_option("Size", "S", None).unwrap();
        editor.generate_combinations().unwrap();

        assert!(matches!(
            editor.set_price(0, -1.0),
            Err(EditorError::InvalidPrice(_))
        ));
        assert!(matches!(
            editor.set_price(5, 1.0),
            Err(EditorError::CombinationOutOfRange { .. })
        ));
    }

    #[test]
    fn test_generation_cap_propagates() {
        let generator = CombinationGenerator::new(GeneratorConfig { max_combinations: 1 });
        let mut editor = ServiceEditor::new(generator);
        editor.add_variation_type("Size", true).unwrap();
        editor.add_option("Size", "S", None).unwrap();
        editor.add_option("Size", "M", None).unwrap();

        assert!(matches!(
            editor.generate_combinations(),
            Err(EditorError::Generation(_))
        ));
    }
}
