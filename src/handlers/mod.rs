//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that receives request data, performs
//! business logic, and returns a JSON response or an `AppError`.

pub mod accounts;
pub mod agencies;
pub mod auth;
pub mod cards;
pub mod contact;
pub mod customers;
pub mod health;
pub mod loans;
pub mod transactions;
pub mod transfers;
