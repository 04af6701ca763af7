//! CSV adapters for routes, clients, payments and receipts.

pub mod client_reader;
pub mod payment_reader;
pub mod receipt_writer;
pub mod route_reader;

/// Shared reader settings: trimmed fields, flexible record lengths.
fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).flexible(true);
    builder
}
