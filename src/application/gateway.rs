use crate::domain::amount::Amount;
use crate::domain::client::Client;
use crate::domain::payment::{PaymentReceipt, PaymentRequest};
use crate::domain::payment_mode::PaymentMode;
use crate::domain::ports::{BankProcessor, BankStoreBox, ClientStoreBox};
use crate::domain::weight_table::WeightTable;
use crate::error::{GatewayError, Result};
use crate::routing::RoutingStrategyBox;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// The entry point for taking payments.
///
/// `PaymentGateway` keeps the client and bank registries, the set of payment
/// modes it accepts, and the routing strategy that picks a bank per payment.
/// Each payment is routed and then processed sequentially.
pub struct PaymentGateway {
    clients: ClientStoreBox,
    banks: BankStoreBox,
    supported_modes: RwLock<BTreeSet<PaymentMode>>,
    strategy: RoutingStrategyBox,
}

impl PaymentGateway {
    /// Creates a new `PaymentGateway` instance.
    ///
    /// # Arguments
    ///
    /// * `clients` - The registry of merchants.
    /// * `banks` - The registry of banks payments can be routed to.
    /// * `strategy` - Decides which bank handles each payment.
    pub fn new(clients: ClientStoreBox, banks: BankStoreBox, strategy: RoutingStrategyBox) -> Self {
        Self {
            clients,
            banks,
            supported_modes: RwLock::new(BTreeSet::new()),
            strategy,
        }
    }

    /// Registers a client. An id that is already registered is left untouched.
    pub async fn add_client(&self, client_id: u32, name: impl Into<String>) -> Result<()> {
        self.register_client(Client::new(client_id, name)).await
    }

    /// Registers a fully built client, keeping any existing client with the same id.
    pub async fn register_client(&self, client: Client) -> Result<()> {
        if self.clients.get(client.id).await?.is_some() {
            debug!(client = client.id, "ignoring duplicate client registration");
            return Ok(());
        }
        self.clients.store(client).await
    }

    pub async fn remove_client(&self, client_id: u32) -> Result<()> {
        self.clients.remove(client_id).await?;
        Ok(())
    }

    pub async fn has_client(&self, client_id: u32) -> Result<bool> {
        Ok(self.clients.get(client_id).await?.is_some())
    }

    pub async fn clients(&self) -> Result<Vec<Client>> {
        self.clients.all_clients().await
    }

    pub async fn add_client_mode(&self, client_id: u32, mode: PaymentMode) -> Result<()> {
        let mut client = self.client(client_id).await?;
        client.add_mode(mode);
        self.clients.store(client).await
    }

    pub async fn remove_client_mode(&self, client_id: u32, mode: PaymentMode) -> Result<()> {
        let mut client = self.client(client_id).await?;
        client.remove_mode(mode);
        self.clients.store(client).await
    }

    pub async fn client_supported_modes(&self, client_id: u32) -> Result<BTreeSet<PaymentMode>> {
        Ok(self.client(client_id).await?.supported_modes().clone())
    }

    pub async fn add_supported_mode(&self, mode: PaymentMode) {
        self.supported_modes.write().await.insert(mode);
    }

    pub async fn remove_supported_mode(&self, mode: PaymentMode) {
        self.supported_modes.write().await.remove(&mode);
    }

    pub async fn supported_modes(&self) -> BTreeSet<PaymentMode> {
        self.supported_modes.read().await.clone()
    }

    pub async fn add_bank(&self, bank: Arc<dyn BankProcessor>) -> Result<()> {
        self.banks.register(bank).await
    }

    pub async fn bank_names(&self) -> Result<Vec<String>> {
        self.banks.names().await
    }

    /// The weight table the routing strategy works from.
    pub fn show_distribution(&self) -> &WeightTable {
        self.strategy.distribution()
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Routes a payment to a bank and lets that bank process it.
    ///
    /// A bank decline is reported in the receipt's status. Errors are reserved
    /// for routing misconfiguration and unknown banks.
    pub async fn make_payment(&self, amount: Amount, mode: PaymentMode) -> Result<PaymentReceipt> {
        self.route_and_process(None, amount, mode).await
    }

    /// Takes a payment on behalf of a registered client.
    ///
    /// Both the gateway and the client must accept `mode`.
    pub async fn make_client_payment(
        &self,
        client_id: u32,
        amount: Amount,
        mode: PaymentMode,
    ) -> Result<PaymentReceipt> {
        let client = self.client(client_id).await?;

        if !self.supported_modes.read().await.contains(&mode) {
            return Err(GatewayError::UnsupportedMode {
                mode,
                by: "the gateway".to_string(),
            });
        }
        if !client.supports(mode) {
            return Err(GatewayError::UnsupportedMode {
                mode,
                by: format!("client {client_id}"),
            });
        }

        self.route_and_process(Some(client_id), amount, mode).await
    }

    /// Dispatches a request to [`make_client_payment`](Self::make_client_payment)
    /// or [`make_payment`](Self::make_payment) depending on whether it names a client.
    pub async fn process_request(&self, request: PaymentRequest) -> Result<PaymentReceipt> {
        match request.client {
            Some(client_id) => {
                self.make_client_payment(client_id, request.amount, request.mode)
                    .await
            }
            None => self.make_payment(request.amount, request.mode).await,
        }
    }

    async fn route_and_process(
        &self,
        client: Option<u32>,
        amount: Amount,
        mode: PaymentMode,
    ) -> Result<PaymentReceipt> {
        let bank_name = self.strategy.route(mode)?;
        let bank = self
            .banks
            .get(&bank_name)
            .await?
            .ok_or_else(|| GatewayError::UnknownBank(bank_name.clone()))?;

        let status = bank.process_payment(amount, mode).await;
        info!(?client, %mode, %amount, bank = %bank_name, %status, strategy = self.strategy.name(), "payment completed");

        Ok(PaymentReceipt {
            client,
            mode,
            amount,
            bank: bank_name,
            status,
        })
    }

    async fn client(&self, client_id: u32) -> Result<Client> {
        self.clients
            .get(client_id)
            .await?
            .ok_or(GatewayError::UnknownClient(client_id))
    }
}
