//! In-memory account store

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::Account;

use super::AccountStore;

/// Process-lifetime account store backed by an insertion-ordered vec.
///
/// A single lock guards both read and append paths so `list_accounts`,
/// `add_account`, and `balance_of` are each atomic and mutually exclusive
/// with appends. Nothing is persisted; the collection dies with the process.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn list_accounts(&self) -> Vec<Account> {
        self.accounts.read().await.clone()
    }

    async fn add_account(&self, account: Account) {
        self.accounts.write().await.push(account);
    }

    async fn balance_of(&self, id: &str) -> Option<String> {
        // Linear scan, first match wins on duplicate ids.
        self.accounts
            .read()
            .await
            .iter()
            .find(|account| account.id == id)
            .map(|account| account.balance.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, name: &str, balance: &str) -> Account {
        Account {
            id: id.to_string(),
            name: name.to_string(),
            balance: balance.to_string(),
        }
    }

    #[tokio::test]
    async fn lists_accounts_in_insertion_order() {
        let store = InMemoryAccountStore::new();
        store.add_account(account("xyz", "John", "10.00")).await;
        store.add_account(account("abc", "Mary", "20.00")).await;

        let accounts = store.list_accounts().await;
        assert_eq!(
            accounts,
            vec![
                account("xyz", "John", "10.00"),
                account("abc", "Mary", "20.00"),
            ]
        );
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryAccountStore::new();
        assert!(store.list_accounts().await.is_empty());
    }

    #[tokio::test]
    async fn listing_is_idempotent_between_mutations() {
        let store = InMemoryAccountStore::new();
        store.add_account(account("xyz", "John", "10.00")).await;

        let first = store.list_accounts().await;
        let second = store.list_accounts().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn balance_of_unknown_id_is_none() {
        let store = InMemoryAccountStore::new();
        assert_eq!(store.balance_of("abc").await, None);
    }

    #[tokio::test]
    async fn balance_of_returns_first_match_on_duplicate_ids() {
        let store = InMemoryAccountStore::new();
        store.add_account(account("abc", "Mary", "20.00")).await;
        store.add_account(account("abc", "Mary", "99.00")).await;

        assert_eq!(store.balance_of("abc").await, Some("20.00".to_string()));
    }

    #[tokio::test]
    async fn balance_of_distinguishes_empty_balance_from_not_found() {
        let store = InMemoryAccountStore::new();
        store.add_account(account("abc", "Mary", "")).await;

        assert_eq!(store.balance_of("abc").await, Some(String::new()));
        assert_eq!(store.balance_of("xyz").await, None);
    }

    #[tokio::test]
    async fn duplicate_accounts_are_accepted() {
        let store = InMemoryAccountStore::new();
        store.add_account(account("abc", "Mary", "20.00")).await;
        store.add_account(account("abc", "Mary", "20.00")).await;

        assert_eq!(store.list_accounts().await.len(), 2);
    }
}
