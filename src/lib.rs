//! Transferer - a minimal HTTP ledger of accounts
//!
//! Transferer keeps an insertion-ordered, in-memory list of accounts and
//! exposes it over a small HTTP API:
//! - List all accounts
//! - Create an account
//! - Look up a single account's balance by id

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
