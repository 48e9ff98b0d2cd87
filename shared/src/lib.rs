//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the society app client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login and resident profile DTOs
//!   - **[`dto::payments`]**: Pending bills, payment orders and Razorpay verification DTOs
//!   - **[`dto::envelope`]**: The `{ success, data, message }` response wrapper
//! - **[`utils`]**: Currency helpers
//!   - **[`utils::rupees_to_paise`]**: Convert a whole-rupee amount to paise for the wire
//!   - **[`utils::format_inr`]**: Render a paise amount for display
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON (`flatNumber`, `billId`, `razorpayOrder`), with two
//! exceptions that are fixed by the payment gateway and the database layer:
//!
//! - Razorpay verification fields are snake_case (`razorpay_order_id`, ...)
//! - Bill identifiers arrive as Mongo-style `_id`
//!
//! Amounts on the wire are **always integer paise**.
//!
//! ## Usage in the Client
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthData};
//! use shared::dto::envelope::ApiResponse;
//!
//! let request = LoginRequest {
//!     email: "resident@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: ApiResponse<AuthData> = reqwest::Client::new()
//!     .post("http://localhost:5000/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
