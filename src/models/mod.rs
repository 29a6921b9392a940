//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! along with the request/response types of the JSON API.

pub mod account;
pub mod agency;
pub mod card;
pub mod contact;
pub mod customer;
pub mod loan;
pub mod session;
pub mod transaction;
pub mod user;
