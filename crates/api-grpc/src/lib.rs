//! # API gRPC
//!
//! gRPC server implementation for the SIRS calculator.
//!
//! Handles:
//! - gRPC service setup and API key checking
//! - Service implementations using `sirs-core` for evaluation
//! - gRPC-specific concerns (interceptors, reflection, tonic integration)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

pub use service::{pb, ApiKeyInterceptor, SirsService};

pub mod service;
