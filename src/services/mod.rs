//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! The transfer executor lives here together with its storage backends.

pub mod card_service;
pub mod memory_uow;
pub mod pg_uow;
pub mod transfer;
