use crate::domain::payment_mode::PaymentMode;
use crate::domain::weight_table::WeightTable;
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RouteRecord {
    mode: PaymentMode,
    bank: String,
    weight: u32,
}

/// Loads a routing table from `mode, bank, weight` rows.
///
/// Row order is preserved per mode. Any malformed row rejects the whole
/// table, since routing from a partial table would skew the distribution.
pub fn read_weight_table<R: Read>(source: R) -> Result<WeightTable> {
    let mut table = WeightTable::new();
    for (index, record) in super::reader_builder()
        .from_reader(source)
        .into_deserialize::<RouteRecord>()
        .enumerate()
    {
        let record = record.map_err(|e| {
            GatewayError::ConfigurationError(format!("Invalid route on row {}: {e}", index + 1))
        })?;
        table.insert(record.mode, record.bank, record.weight)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_routes_in_order() {
        let data = "mode, bank, weight\nUPI, HDFC, 70\nCARD, HDFC, 100\nUPI, ICICI, 30";
        let table = read_weight_table(data.as_bytes()).unwrap();

        let upi = table.entries(PaymentMode::Upi).unwrap();
        assert_eq!(upi[0].bank, "HDFC");
        assert_eq!(upi[1].bank, "ICICI");
        assert_eq!(table.total_weight(PaymentMode::Upi), 100);
        assert_eq!(table.total_weight(PaymentMode::Card), 100);
    }

    #[test]
    fn test_reads_lowercase_modes() {
        let data = "mode, bank, weight\nupi, HDFC, 1\nNetBanking, SBI, 2";
        let table = read_weight_table(data.as_bytes()).unwrap();

        assert_eq!(table.entries(PaymentMode::Upi).unwrap()[0].bank, "HDFC");
        assert_eq!(table.total_weight(PaymentMode::Netbanking), 2);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let data = "mode, bank, weight\nUPI, HDFC, -5";
        let err = read_weight_table(data.as_bytes()).unwrap_err();
        assert!(matches!(err, GatewayError::ConfigurationError(_)));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let data = "mode, bank, weight\nCRYPTO, HDFC, 5";
        assert!(read_weight_table(data.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_file_gives_empty_table() {
        let table = read_weight_table("mode, bank, weight\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }
}
