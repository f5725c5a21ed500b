//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{NewProduct, Product, ProductChanges};
pub use repository::ProductRepository;
