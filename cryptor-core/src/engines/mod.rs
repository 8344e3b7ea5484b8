// cryptor-core/src/engines/mod.rs
//! Concrete implementations of the `RecoveryEngine` trait.
//!
//! License: MIT OR APACHE 2.0

pub mod frequency_engine;
