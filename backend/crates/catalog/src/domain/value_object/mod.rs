//! Value Objects

pub mod price;

pub use price::Price;
