use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payment_router::application::gateway::PaymentGateway;
use payment_router::domain::payment_mode::PaymentMode;
use payment_router::domain::weight_table::WeightTable;
use payment_router::infrastructure::in_memory::{InMemoryBankStore, InMemoryClientStore};
use payment_router::infrastructure::simulated_bank::SimulatedBank;
use payment_router::interfaces::csv::client_reader::read_clients;
use payment_router::interfaces::csv::payment_reader::PaymentReader;
use payment_router::interfaces::csv::receipt_writer::ReceiptWriter;
use payment_router::interfaces::csv::route_reader::read_weight_table;
use payment_router::routing::{RngDraws, RoundRobinStrategy, RoutingStrategyBox, WeightedStrategy};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (`client, mode, amount`)
    input: PathBuf,

    /// Routing table CSV (`mode, bank, weight`). Defaults to the built-in table.
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Clients CSV (`client, name, modes`), modes separated by spaces.
    #[arg(long)]
    clients: Option<PathBuf>,

    /// Payment mode the gateway accepts. Repeatable; defaults to every routed mode.
    #[arg(long = "enable-mode", value_name = "MODE")]
    enable_modes: Vec<PaymentMode>,

    /// How banks are picked for each payment.
    #[arg(long, value_enum, default_value_t = StrategyKind::Weighted)]
    strategy: StrategyKind,

    /// Seed for routing and simulated bank outcomes, for reproducible runs.
    #[arg(long, env = "PAYMENT_ROUTER_SEED")]
    seed: Option<u64>,

    /// Print the routing distribution as JSON on stderr before processing.
    #[arg(long)]
    show_distribution: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyKind {
    Weighted,
    RoundRobin,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let table = match &cli.routes {
        Some(path) => read_weight_table(File::open(path).into_diagnostic()?).into_diagnostic()?,
        None => builtin_routes().into_diagnostic()?,
    };

    let strategy: RoutingStrategyBox = match cli.strategy {
        StrategyKind::Weighted => Box::new(WeightedStrategy::with_draws(
            table.clone(),
            draws(cli.seed, 0),
        )),
        StrategyKind::RoundRobin => Box::new(RoundRobinStrategy::new(table.clone())),
    };

    let gateway = PaymentGateway::new(
        Box::new(InMemoryClientStore::new()),
        Box::new(InMemoryBankStore::new()),
        strategy,
    );

    // Each bank accepts exactly the modes it is routed for
    for (stream, (name, modes)) in (1..).zip(table.banks()) {
        let mut bank = SimulatedBank::new(name, draws(cli.seed, stream));
        for mode in modes {
            bank.add_supported_mode(mode);
        }
        gateway.add_bank(Arc::new(bank)).await.into_diagnostic()?;
    }

    let modes: Vec<PaymentMode> = if cli.enable_modes.is_empty() {
        table.modes().collect()
    } else {
        cli.enable_modes.clone()
    };
    for mode in modes {
        gateway.add_supported_mode(mode).await;
    }

    if let Some(path) = &cli.clients {
        for client in read_clients(File::open(path).into_diagnostic()?).into_diagnostic()? {
            gateway.register_client(client).await.into_diagnostic()?;
        }
    }

    if cli.show_distribution {
        let json = serde_json::to_string_pretty(gateway.show_distribution()).into_diagnostic()?;
        eprintln!("{json}");
    }

    // Process payments
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);
    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());
    for request in reader.payments() {
        match request {
            Ok(request) => match gateway.process_request(request).await {
                Ok(receipt) => writer.write_receipt(&receipt).into_diagnostic()?,
                Err(e) => eprintln!("Error processing payment: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

/// Draw source for one consumer. With a seed, each consumer gets its own
/// stream derived from it so runs are reproducible.
fn draws(seed: Option<u64>, stream: u64) -> RngDraws {
    match seed {
        Some(seed) => RngDraws::seeded(seed.wrapping_add(stream)),
        None => RngDraws::from_entropy(),
    }
}

fn builtin_routes() -> payment_router::error::Result<WeightTable> {
    WeightTable::new()
        .with_route(PaymentMode::Upi, "HDFC", 70)?
        .with_route(PaymentMode::Upi, "ICICI", 30)?
        .with_route(PaymentMode::Card, "HDFC", 100)
}
