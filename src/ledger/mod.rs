use std::collections::BTreeSet;

use uuid::Uuid;

use crate::db::KvStore;
use crate::models::Transaction;

/// Storage key for the serialized transaction collection.
const LEDGER_KEY: &str = "transactions";

/// The authoritative in-memory transaction list, kept synchronized with
/// the key-value store by a full-collection write on every mutation.
/// Insertion order is add order; date order is a display-time sort.
pub(crate) struct Ledger {
    store: KvStore,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Load the previously saved collection. A missing key, an adapter
    /// read error, or a blob that fails to decode all start an empty
    /// ledger; no error leaves this function.
    pub(crate) fn load(store: KvStore) -> Self {
        let transactions = store
            .get(LEDGER_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_slice(&blob).ok())
            .unwrap_or_default();
        Self {
            store,
            transactions,
        }
    }

    /// Append a transaction. Content is not re-validated here; the
    /// caller guaranteed it at construction.
    pub(crate) fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
        self.persist();
    }

    /// Remove the transactions at the given positions in the current
    /// in-memory order, in a single pass. Positions are 0-based store
    /// order, not display order. Out-of-range positions match nothing
    /// and are ignored.
    pub(crate) fn delete(&mut self, indices: &BTreeSet<usize>) {
        if indices.is_empty() {
            return;
        }
        let mut i = 0;
        self.transactions.retain(|_| {
            let keep = !indices.contains(&i);
            i += 1;
            keep
        });
        self.persist();
    }

    /// Snapshot of the current collection, in store order.
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Serialize the whole collection under the single store key.
    /// Best-effort: a failed write is dropped and the in-memory ledger
    /// stays authoritative for the rest of the session.
    fn persist(&self) {
        if let Ok(blob) = serde_json::to_vec(&self.transactions) {
            let _ = self.store.set(LEDGER_KEY, &blob);
        }
    }
}

#[cfg(test)]
mod tests;
