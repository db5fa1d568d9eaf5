use crate::service::{PriceCombination, VariationType};
use serde::{Deserialize, Serialize};

/// Limits for combination generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum number of combinations a single generation may produce
    pub max_combinations: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_combinations: 500,
        }
    }
}

/// Expands required variation axes into the full combination space
pub struct CombinationGenerator {
    config: GeneratorConfig,
}

impl CombinationGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Number of combinations the required axes would expand to,
    /// without materializing any of them. Saturates instead of
    /// overflowing; a saturated count always trips the cap.
    pub fn combination_count(&self, variation_types: &[VariationType]) -> usize {
        let mut count: usize = 1;
        let mut any_required = false;

        for vt in variation_types.iter().filter(|t| t.required) {
            any_required = true;
            count = count.saturating_mul(vt.options.len());
        }

        if any_required {
            count
        } else {
            0
        }
    }

    /// Generate every mandatory-option cross-product as an ordered tuple
    /// of option names, enforcing the configured cap
    pub fn generate(&self, variation_types: &[VariationType]) -> Result<Vec<Vec<String>>, CombinationError> {
        let count = self.combination_count(variation_types);
        if count > self.config.max_combinations {
            tracing::warn!(
                requested = count,
                limit = self.config.max_combinations,
                "combination generation rejected"
            );
            return Err(CombinationError::TooManyCombinations {
                requested: count,
                limit: self.config.max_combinations,
            });
        }

        Ok(generate_all_combinations(variation_types))
    }

    /// Generate unpriced draft combinations for the administrator to edit
    pub fn drafts(&self, variation_types: &[VariationType]) -> Result<Vec<PriceCombination>, CombinationError> {
        Ok(self
            .generate(variation_types)?
            .into_iter()
            .map(PriceCombination::draft)
            .collect())
    }
}

impl Default for CombinationGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Cross-product of the required axes' option names.
///
/// Axis order is preserved within each tuple and tuples are emitted with
/// the last axis varying fastest, so the output is deterministic for a
/// given input. Axes with `required == false` do not participate; if no
/// axis is required the result is empty and callers fall back to the
/// service's base price.
pub fn generate_all_combinations(variation_types: &[VariationType]) -> Vec<Vec<String>> {
    let axes: Vec<&VariationType> = variation_types.iter().filter(|t| t.required).collect();
    if axes.is_empty() {
        return Vec::new();
    }
    // An empty option list on any required axis empties the product
    if axes.iter().any(|a| a.options.is_empty()) {
        return Vec::new();
    }

    let mut combinations: Vec<Vec<String>> = vec![Vec::new()];
    for axis in axes {
        let mut expanded = Vec::with_capacity(combinations.len() * axis.options.len());
        for prefix in &combinations {
            for option in &axis.options {
                let mut tuple = prefix.clone();
                tuple.push(option.name.clone());
                expanded.push(tuple);
            }
        }
        combinations = expanded;
    }

    combinations
}

#[derive(Debug, thiserror::Error)]
pub enum CombinationError {
    #[error("too many combinations: requested {requested}, limit {limit}")]
    TooManyCombinations { requested: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::VariationOption;

    fn axis(name: &str, required: bool, options: &[&str]) -> VariationType {
        VariationType {
            name: name.to_string(),
            options: options.iter().map(|o| VariationOption::new(*o)).collect(),
            required,
        }
    }

    #[test]
    fn test_cross_product_order_and_count() {
        let types = vec![
            axis("Size", true, &["S", "M", "L"]),
            axis("Color", true, &["Red", "Blue"]),
        ];

        let combos = generate_all_combinations(&types);
        assert_eq!(combos.len(), 6);
        // Last axis varies fastest
        assert_eq!(combos[0], vec!["S", "Red"]);
        assert_eq!(combos[1], vec!["S", "Blue"]);
        assert_eq!(combos[2], vec!["M", "Red"]);
        assert_eq!(combos[3], vec!["M", "Blue"]);
        assert_eq!(combos[4], vec!["L", "Red"]);
        assert_eq!(combos[5], vec!["L", "Blue"]);
    }

    #[test]
    fn test_optional_axes_do_not_participate() {
        let types = vec![
            axis("Size", true, &["S", "M"]),
            axis("Finish", false, &["Matte", "Glossy"]),
        ];

        let combos = generate_all_combinations(&types);
        assert_eq!(combos, vec![vec!["S"], vec!["M"]]);
    }

    #[test]
    fn test_no_required_axes_yields_empty() {
        let types = vec![axis("Finish", false, &["Matte", "Glossy"])];
        assert!(generate_all_combinations(&types).is_empty());
        assert!(generate_all_combinations(&[]).is_empty());
    }

    #[test]
    fn test_required_axis_without_options_yields_empty() {
        let types = vec![axis("Size", true, &["S"]), axis("Color", true, &[])];
        assert!(generate_all_combinations(&types).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let types = vec![
            axis("Size", true, &["S", "M"]),
            axis("Color", true, &["Red", "Blue"]),
        ];

        assert_eq!(
            generate_all_combinations(&types),
            generate_all_combinations(&types)
        );
    }

    #[test]
    fn test_generator_enforces_cap() {
        let generator = CombinationGenerator::new(GeneratorConfig { max_combinations: 5 });
        let types = vec![
            axis("Size", true, &["S", "M", "L"]),
            axis("Color", true, &["Red", "Blue"]),
        ];

        let err = generator.generate(&types).unwrap_err();
        match err {
            CombinationError::TooManyCombinations { requested, limit } => {
                assert_eq!(requested, 6);
                assert_eq!(limit, 5);
            }
        }
    }

    #[test]
    fn test_drafts_are_unpriced() {
        let generator = CombinationGenerator::default();
        let types = vec![axis("Size", true, &["S", "M"])];

        let drafts = generator.drafts(&types).unwrap();
        assert_eq!(drafts.len(), 2);
        assert!(drafts.iter().all(|d| d.price == 0.0 && d.description.is_none()));
        assert_eq!(drafts[0].combination, vec!["S"]);
    }

    #[test]
    fn test_combination_count_without_materializing() {
        let generator = CombinationGenerator::default();
        let types = vec![
            axis("A", true, &["1", "2", "3"]),
            axis("B", true, &["x", "y"]),
            axis("C", false, &["ignored"]),
        ];

        assert_eq!(generator.combination_count(&types), 6);
        assert_eq!(generator.combination_count(&[]), 0);
    }
}
