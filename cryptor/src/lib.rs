// cryptor/src/lib.rs
//! # Cryptor CLI Application
//!
//! This crate provides the terminal interface for `cryptor-core`: known-key
//! transforms, statistical key recovery and decoding of stored messages.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::dispatch;
