//! Account storage abstraction
//!
//! The HTTP layer depends on the [`AccountStore`] trait rather than a
//! concrete structure, so alternative stores (e.g. a persistent one) can be
//! substituted without touching the dispatcher.

use async_trait::async_trait;

use crate::types::Account;

pub mod memory;

pub use memory::InMemoryAccountStore;

/// Capability set the HTTP dispatcher needs from a store
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Return the full account collection in insertion order.
    async fn list_accounts(&self) -> Vec<Account>;

    /// Append an account to the end of the collection.
    ///
    /// Performs no validation and never rejects duplicates.
    async fn add_account(&self, account: Account);

    /// Return the balance of the first account whose id matches, or `None`
    /// if no account matches.
    async fn balance_of(&self, id: &str) -> Option<String>;
}
