use std::collections::HashMap;

use crate::market::types::Ticker;

/// One user's subscription list. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAccount {
    subscriptions: Vec<Ticker>,
}

impl UserAccount {
    pub fn subscriptions(&self) -> &[Ticker] {
        &self.subscriptions
    }

    pub fn is_subscribed(&self, ticker: Ticker) -> bool {
        self.subscriptions.contains(&ticker)
    }

    /// Append if absent. Idempotent.
    fn subscribe(&mut self, ticker: Ticker) {
        if !self.is_subscribed(ticker) {
            self.subscriptions.push(ticker);
        }
    }

    /// Remove if present, preserving the order of the rest. Idempotent.
    fn unsubscribe(&mut self, ticker: Ticker) {
        self.subscriptions.retain(|t| *t != ticker);
    }
}

/// All known accounts, keyed by email. Accounts are created lazily on first
/// login; state lives only for the process lifetime.
#[derive(Debug)]
pub struct AccountStore {
    users: HashMap<String, UserAccount>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// The two demo accounts that ship pre-populated.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        for ticker in [Ticker::Tsla, Ticker::Goog, Ticker::Nvda] {
            store.subscribe("user1@email.com", ticker);
        }
        for ticker in [Ticker::Amzn, Ticker::Meta] {
            store.subscribe("user2@email.com", ticker);
        }

        store
    }

    /// Fetch the account, creating an empty one on first sight.
    pub fn ensure(&mut self, email: &str) -> &UserAccount {
        self.users.entry(email.to_string()).or_default()
    }

    pub fn get(&self, email: &str) -> Option<&UserAccount> {
        self.users.get(email)
    }

    pub fn subscribe(&mut self, email: &str, ticker: Ticker) {
        self.users
            .entry(email.to_string())
            .or_default()
            .subscribe(ticker);
    }

    pub fn unsubscribe(&mut self, email: &str, ticker: Ticker) {
        if let Some(account) = self.users.get_mut(email) {
            account.unsubscribe(ticker);
        }
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_accounts_match_presets() {
        let store = AccountStore::seeded();

        let user1 = store.get("user1@email.com").expect("seeded");
        assert_eq!(
            user1.subscriptions(),
            [Ticker::Tsla, Ticker::Goog, Ticker::Nvda]
        );

        let user2 = store.get("user2@email.com").expect("seeded");
        assert_eq!(user2.subscriptions(), [Ticker::Amzn, Ticker::Meta]);
    }

    #[test]
    fn ensure_creates_empty_account_once() {
        let mut store = AccountStore::new();

        assert!(store.get("x@y.com").is_none());
        assert!(store.ensure("x@y.com").subscriptions().is_empty());

        store.subscribe("x@y.com", Ticker::Meta);
        assert_eq!(store.ensure("x@y.com").subscriptions(), [Ticker::Meta]);
    }

    #[test]
    fn subscribe_is_idempotent() {
        let mut store = AccountStore::new();

        store.subscribe("x@y.com", Ticker::Tsla);
        store.subscribe("x@y.com", Ticker::Tsla);

        let account = store.get("x@y.com").expect("created");
        assert_eq!(account.subscriptions(), [Ticker::Tsla]);
    }

    #[test]
    fn unsubscribe_missing_is_a_noop() {
        let mut store = AccountStore::new();
        store.subscribe("x@y.com", Ticker::Goog);

        store.unsubscribe("x@y.com", Ticker::Nvda);
        store.unsubscribe("nobody@y.com", Ticker::Goog);

        let account = store.get("x@y.com").expect("created");
        assert_eq!(account.subscriptions(), [Ticker::Goog]);
    }

    #[test]
    fn insertion_order_survives_removals() {
        let mut store = AccountStore::new();

        for ticker in [Ticker::Nvda, Ticker::Goog, Ticker::Amzn, Ticker::Meta] {
            store.subscribe("x@y.com", ticker);
        }
        store.unsubscribe("x@y.com", Ticker::Goog);

        let account = store.get("x@y.com").expect("created");
        assert_eq!(
            account.subscriptions(),
            [Ticker::Nvda, Ticker::Amzn, Ticker::Meta]
        );
    }

    #[test]
    fn no_duplicates_under_mixed_sequences() {
        let mut store = AccountStore::new();

        for _ in 0..3 {
            for ticker in Ticker::ALL {
                store.subscribe("x@y.com", ticker);
            }
            store.unsubscribe("x@y.com", Ticker::Amzn);
            store.subscribe("x@y.com", Ticker::Amzn);
        }

        let subs = store.get("x@y.com").expect("created").subscriptions();
        let mut seen = subs.to_vec();
        seen.sort_by_key(|t| t.symbol());
        seen.dedup();
        assert_eq!(seen.len(), subs.len());
    }
}
