//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers. They can
//! authenticate requests, inject context, or short-circuit unauthorized
//! requests.

/// Bearer-token session authentication middleware
pub mod auth;
