use crate::domain::client::Client;
use crate::domain::ports::{BankProcessor, BankStore, ClientStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory client registry.
///
/// Uses `Arc<RwLock<HashMap<u32, Client>>>` so clones share the same state.
#[derive(Default, Clone)]
pub struct InMemoryClientStore {
    clients: Arc<RwLock<HashMap<u32, Client>>>,
}

impl InMemoryClientStore {
    /// Creates a new, empty in-memory client store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn store(&self, client: Client) -> Result<()> {
        let mut clients = self.clients.write().await;
        clients.insert(client.id, client);
        Ok(())
    }

    async fn get(&self, client_id: u32) -> Result<Option<Client>> {
        let clients = self.clients.read().await;
        Ok(clients.get(&client_id).cloned())
    }

    async fn remove(&self, client_id: u32) -> Result<Option<Client>> {
        let mut clients = self.clients.write().await;
        Ok(clients.remove(&client_id))
    }

    async fn all_clients(&self) -> Result<Vec<Client>> {
        let clients = self.clients.read().await;
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by_key(|client| client.id);
        Ok(all)
    }
}

/// A thread-safe in-memory bank registry keyed by bank name.
#[derive(Default, Clone)]
pub struct InMemoryBankStore {
    banks: Arc<RwLock<BTreeMap<String, Arc<dyn BankProcessor>>>>,
}

impl InMemoryBankStore {
    /// Creates a new, empty in-memory bank store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BankStore for InMemoryBankStore {
    async fn register(&self, bank: Arc<dyn BankProcessor>) -> Result<()> {
        let mut banks = self.banks.write().await;
        banks.insert(bank.name().to_string(), bank);
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Arc<dyn BankProcessor>>> {
        let banks = self.banks.read().await;
        Ok(banks.get(name).cloned())
    }

    async fn names(&self) -> Result<Vec<String>> {
        let banks = self.banks.read().await;
        Ok(banks.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment_mode::PaymentMode;
    use crate::infrastructure::simulated_bank::SimulatedBank;
    use crate::routing::FixedDraws;

    #[tokio::test]
    async fn test_in_memory_client_store() {
        let store = InMemoryClientStore::new();
        let client = Client::new(1, "Flipkart").with_modes([PaymentMode::Card]);

        store.store(client.clone()).await.unwrap();
        let retrieved = store.get(1).await.unwrap().unwrap();
        assert_eq!(retrieved, client);

        assert!(store.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_client_store_remove() {
        let store = InMemoryClientStore::new();
        store.store(Client::new(1, "Flipkart")).await.unwrap();
        store.store(Client::new(2, "Amazon")).await.unwrap();

        let removed = store.remove(1).await.unwrap();
        assert_eq!(removed.map(|c| c.name), Some("Flipkart".to_string()));
        assert!(store.remove(1).await.unwrap().is_none());

        let all = store.all_clients().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 2);
    }

    #[tokio::test]
    async fn test_in_memory_bank_store() {
        let store = InMemoryBankStore::new();
        let bank = SimulatedBank::new("HDFC", FixedDraws::new([0])).with_mode(PaymentMode::Upi);
        store.register(Arc::new(bank)).await.unwrap();

        let retrieved = store.get("HDFC").await.unwrap().unwrap();
        assert_eq!(retrieved.name(), "HDFC");
        assert!(store.get("ICICI").await.unwrap().is_none());
        assert_eq!(store.names().await.unwrap(), vec!["HDFC".to_string()]);
    }
}
