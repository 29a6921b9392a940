//! Banking back-office service library.
//!
//! A REST API over a relational banking schema: users, customers, accounts,
//! transactions, loans, repayments, cards, credits, agencies and contact
//! messages. The engineering core is the account-to-account transfer
//! executor in [`services::transfer`], which moves a balance between two
//! accounts and appends the matching debit/credit ledger rows in one
//! all-or-nothing unit of work.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries, `NUMERIC` balances)
//! - **Authentication**: bearer session tokens, SHA-256 hashed at rest
//! - **Format**: JSON requests/responses

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
