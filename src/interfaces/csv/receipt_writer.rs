use crate::domain::payment::{PaymentReceipt, PaymentStatus};
use crate::domain::payment_mode::PaymentMode;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes payment receipts as `client,mode,amount,bank,status` rows.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipt(&mut self, receipt: &PaymentReceipt) -> Result<()> {
        self.writer.serialize(ReceiptRow::from(receipt))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Receipt as written out, with the amount in normalized form.
#[derive(Serialize)]
struct ReceiptRow<'a> {
    client: Option<u32>,
    mode: PaymentMode,
    amount: String,
    bank: &'a str,
    status: PaymentStatus,
}

impl<'a> From<&'a PaymentReceipt> for ReceiptRow<'a> {
    fn from(receipt: &'a PaymentReceipt) -> Self {
        Self {
            client: receipt.client,
            mode: receipt.mode,
            amount: receipt.amount.to_string(),
            bank: &receipt.bank,
            status: receipt.status,
        }
    }
}
