//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `GatewayError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`,
//!   `PaymentGateway`, `KeyValueStore`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use society_client::core::service::{ApiService, KeyValueStore};
//! use society_client::services::storage::MemoryStore;
//!
//! // In production: file-backed storage and the HTTP client
//! // In tests: in-memory storage and mock services
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, GatewayError, Result};
pub use service::{ApiService, KeyValueStore, PaymentGateway};
