pub mod manager;
pub mod models;

pub use manager::{CartError, CartManager};
pub use models::{Cart, CartItem};
