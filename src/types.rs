//! Core types for transferer

use serde::{Deserialize, Serialize};

/// Account represents a single ledger entry.
///
/// All fields are opaque strings. Nothing is validated: empty strings and
/// duplicate ids are legal, and `balance` is never parsed as a number.
/// Fields absent from an incoming body decode as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub balance: String,
}

/// Wire wrapper for a balance lookup response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountBalance {
    pub balance: String,
}
