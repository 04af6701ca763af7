use super::amount::Amount;
use super::client::Client;
use super::payment::PaymentStatus;
use super::payment_mode::PaymentMode;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A bank the gateway can hand payments to.
#[async_trait]
pub trait BankProcessor: Send + Sync {
    fn name(&self) -> &str;
    async fn process_payment(&self, amount: Amount, mode: PaymentMode) -> PaymentStatus;
}

#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn store(&self, client: Client) -> Result<()>;
    async fn get(&self, client_id: u32) -> Result<Option<Client>>;
    async fn remove(&self, client_id: u32) -> Result<Option<Client>>;
    async fn all_clients(&self) -> Result<Vec<Client>>;
}

#[async_trait]
pub trait BankStore: Send + Sync {
    async fn register(&self, bank: Arc<dyn BankProcessor>) -> Result<()>;
    async fn get(&self, name: &str) -> Result<Option<Arc<dyn BankProcessor>>>;
    async fn names(&self) -> Result<Vec<String>>;
}

pub type ClientStoreBox = Box<dyn ClientStore>;
pub type BankStoreBox = Box<dyn BankStore>;
