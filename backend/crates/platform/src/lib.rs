//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations that carry no domain vocabulary:
//! - Password policy, Argon2id hashing and verification

pub mod password;
