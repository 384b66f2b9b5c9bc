//! # Bookshelf Library
//!
//! This crate provides an in-memory bookshelf REST API with:
//! - CRUD endpoints for book records
//! - Field-level payload validation
//! - Uniform `success`/`fail` JSON envelopes
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Book entity and repository trait
//! - **Application Layer**: Book service, validation, and DTOs
//! - **Infrastructure Layer**: In-memory store and metrics
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! bookshelf/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and repository traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Storage and metrics implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, IDs, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business types
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
