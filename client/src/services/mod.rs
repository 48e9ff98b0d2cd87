//! # Services Module
//!
//! External integrations for the society client. Everything here sits behind a
//! trait from [`crate::core::service`] so controllers can be tested without a
//! backend, a gateway or a disk.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - Backend HTTP client (auth, bills, orders, verification)
//! ├── gateway.rs  - Razorpay checkout bridge to the platform shell
//! └── storage.rs  - Key-value stores and the persisted token
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    society client                        │
//! │                                                          │
//! │  ┌────────────┐   ┌───────────────┐   ┌──────────────┐  │
//! │  │ ApiClient  │   │ BridgeGateway │   │  TokenStore  │  │
//! │  └─────┬──────┘   └───────┬───────┘   └──────┬───────┘  │
//! └────────┼──────────────────┼──────────────────┼──────────┘
//!          │ HTTP/JSON        │ channel          │ file / memory
//!          ▼                  ▼                  ▼
//! ┌──────────────────┐ ┌────────────────┐ ┌─────────────────┐
//! │ Society backend  │ │ Razorpay modal │ │ Device storage  │
//! │ /auth/*          │ │ (platform SDK) │ │ key "token"     │
//! │ /payments/*      │ │                │ │                 │
//! └──────────────────┘ └────────────────┘ └─────────────────┘
//! ```

pub mod api;
pub mod gateway;
pub mod storage;
