use crate::domain::client::Client;
use crate::domain::payment_mode::PaymentMode;
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ClientRecord {
    client: u32,
    name: String,
    #[serde(default)]
    modes: String,
}

impl TryFrom<ClientRecord> for Client {
    type Error = GatewayError;

    fn try_from(record: ClientRecord) -> Result<Self> {
        let modes = record
            .modes
            .split_whitespace()
            .map(str::parse::<PaymentMode>)
            .collect::<Result<Vec<_>>>()?;
        Ok(Client::new(record.client, record.name).with_modes(modes))
    }
}

/// Loads clients from `client, name, modes` rows, `modes` being a
/// space-separated list such as `UPI CARD`.
pub fn read_clients<R: Read>(source: R) -> Result<Vec<Client>> {
    super::reader_builder()
        .from_reader(source)
        .into_deserialize::<ClientRecord>()
        .enumerate()
        .map(|(index, record)| {
            record
                .map_err(GatewayError::from)
                .and_then(Client::try_from)
                .map_err(|e| {
                    GatewayError::ConfigurationError(format!("Invalid client on row {}: {e}", index + 1))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_clients_with_modes() {
        let data = "client, name, modes\n1, Flipkart, CARD upi\n2, Amazon,";
        let clients = read_clients(data.as_bytes()).unwrap();

        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].name, "Flipkart");
        assert!(clients[0].supports(PaymentMode::Card));
        assert!(clients[0].supports(PaymentMode::Upi));
        assert!(clients[1].supported_modes().is_empty());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let data = "client, name, modes\n1, Flipkart, CHEQUE";
        let err = read_clients(data.as_bytes()).unwrap_err();
        assert!(matches!(err, GatewayError::ConfigurationError(_)));
    }
}
