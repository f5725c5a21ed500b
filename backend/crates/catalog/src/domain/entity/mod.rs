//! Entities

pub mod product;

pub use product::{NewProduct, PLACEHOLDER_IMAGE, Product, ProductChanges};
