//! Domain models with validation at construction
//!
//! Form input is parsed once into typed values. Invalid input returns
//! `ValidationError`, never a panic, and never reaches the store.

pub mod item;
pub mod price;
pub mod validation;

pub use item::{Item, ItemForm, ItemInput, ItemName};
pub use price::parse_price;
pub use validation::ValidationError;
