//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client and backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, token verification and the resident profile
//! - [`payments`] - Pending bills, order creation and payment verification
//! - [`envelope`] - Generic `{ success, data, message }` wrapper used by most endpoints
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase via `#[serde(rename_all = "camelCase")]`
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to snake_case strings (`amenity_booking`)
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "resident@example.com",
//!   "password": "secret"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "data": {
//!     "user": {
//!       "id": "u1",
//!       "name": "Asha Rao",
//!       "email": "resident@example.com",
//!       "flatNumber": "A-101",
//!       "wing": "A",
//!       "role": "resident"
//!     },
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//!   }
//! }
//! ```

pub mod auth;
pub mod envelope;
pub mod payments;

pub use auth::*;
pub use envelope::*;
pub use payments::*;
