//! Token ledger read interface.
//!
//! The governance engine never owns token balances — they live in an external
//! ledger (the ADAC token contract). The engine only reads them, twice:
//! once to check proposal-creation eligibility, and once per vote to
//! snapshot the voter's power at cast time.

use std::collections::HashMap;
use std::sync::RwLock;

use adac_types::{Address, TokenAmount};

/// Read access to token balances.
///
/// Implementations are expected to be cheap (no long I/O waits) and are
/// shared across threads, so the trait requires `Send + Sync`.
pub trait TokenLedger: Send + Sync {
    /// Current balance of `address`. Unknown addresses have balance zero.
    fn balance_of(&self, address: &Address) -> TokenAmount;
}

/// An in-memory token ledger.
///
/// Used by the test suites and by the daemon's dev mode, where balances are
/// seeded from configuration instead of an external token contract.
#[derive(Default)]
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Address, TokenAmount>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from an iterator of (address, balance) pairs.
    pub fn with_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = (Address, TokenAmount)>,
    {
        Self {
            balances: RwLock::new(balances.into_iter().collect()),
        }
    }

    /// Set (or overwrite) the balance of an address.
    pub fn set_balance(&self, address: Address, balance: TokenAmount) {
        tracing::debug!(%address, %balance, "ledger balance set");
        self.balances
            .write()
            .expect("ledger lock poisoned")
            .insert(address, balance);
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, address: &Address) -> TokenAmount {
        self.balances
            .read()
            .expect("ledger lock poisoned")
            .get(address)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_address_has_zero_balance() {
        let ledger = InMemoryLedger::new();
        assert_eq!(
            ledger.balance_of(&Address::new("nobody")),
            TokenAmount::ZERO
        );
    }

    #[test]
    fn set_balance_overwrites() {
        let ledger = InMemoryLedger::new();
        let addr = Address::new("alice");
        ledger.set_balance(addr.clone(), TokenAmount::new(100));
        assert_eq!(ledger.balance_of(&addr), TokenAmount::new(100));
        ledger.set_balance(addr.clone(), TokenAmount::new(50));
        assert_eq!(ledger.balance_of(&addr), TokenAmount::new(50));
    }

    #[test]
    fn with_balances_seeds_map() {
        let ledger = InMemoryLedger::with_balances([
            (Address::new("a"), TokenAmount::new(1)),
            (Address::new("b"), TokenAmount::new(2)),
        ]);
        assert_eq!(ledger.balance_of(&Address::new("b")), TokenAmount::new(2));
    }
}
