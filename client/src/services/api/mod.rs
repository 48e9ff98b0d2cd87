//! # Backend API Client Module
//!
//! HTTP client for communicating with the society backend.
//! Handles authentication and the bill-payment endpoints.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, envelope decoding, ApiService impl
//! ├── error.rs    - Transport-level ApiError
//! ├── auth.rs     - Authentication endpoints (register, login, logout, verify)
//! └── payments.rs - Payment endpoints (pending bills, create order, verify payment)
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod payments;

pub use client::ApiClient;
pub use error::ApiError;
