//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod id_generator;
pub mod validation;
