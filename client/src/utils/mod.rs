//! # Utility Functions
//!
//! Shared utility functions used across the society client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form validation (registration, login)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Currency conversion and formatting
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
