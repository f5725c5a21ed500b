//! Entities

pub mod job;

pub use job::{Job, NewJob};
