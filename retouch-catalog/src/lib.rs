pub mod combinations;
pub mod editor;
pub mod pricing;
pub mod service;

pub use combinations::{generate_all_combinations, CombinationGenerator, GeneratorConfig};
pub use editor::ServiceEditor;
pub use pricing::{preselect_single_options, resolve_combination, resolve_price, Selection};
pub use service::{PriceCombination, Service, VariationOption, VariationType};
