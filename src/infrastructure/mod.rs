//! Infrastructure Layer
//!
//! Contains implementations for external concerns:
//! - Book storage (in memory)
//! - Prometheus metrics

pub mod metrics;
pub mod repositories;
