//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{Job, NewJob};
pub use repository::JobRepository;
pub use value_object::JobStatus;
