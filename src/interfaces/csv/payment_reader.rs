use crate::domain::payment::PaymentRequest;
use crate::error::{GatewayError, Result};
use std::io::Read;

/// Reads payment requests (`client, mode, amount`) from a CSV source.
///
/// Whitespace is trimmed and record lengths are flexible, so a trailing
/// empty column or a blank `client` both work.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: super::reader_builder().from_reader(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes payments.
    ///
    /// A malformed row yields an `Err` for that row only; iteration continues.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GatewayError::from))
    }
}
