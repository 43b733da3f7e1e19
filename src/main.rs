use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payment_strategy::application::processor::{PaymentProcessor, demo_instructions};
use payment_strategy::application::registry::StrategyRegistry;
use payment_strategy::domain::ports::PaymentSinkRef;
use payment_strategy::infrastructure::in_memory::InMemorySink;
use payment_strategy::infrastructure::stdout::StdoutSink;
use payment_strategy::interfaces::csv::instruction_reader::InstructionReader;
use payment_strategy::interfaces::csv::receipt_writer::ReceiptWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One "Paid <amount> with <method>" line per payment, printed as it happens
    Text,
    /// All receipts as CSV once every payment has been processed
    Csv,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment instructions CSV file (`method, amount`). Runs the built-in demo if omitted.
    input: Option<PathBuf>,

    /// How executed payments are reported on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log debug output to stderr. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let collected = InMemorySink::new();
    let sink: PaymentSinkRef = match cli.output {
        OutputFormat::Text => Arc::new(StdoutSink::new()),
        OutputFormat::Csv => Arc::new(collected.clone()),
    };
    let mut processor = PaymentProcessor::new(StrategyRegistry::new(sink));

    if let Some(input) = cli.input {
        let file = File::open(input).into_diagnostic()?;
        let instructions = InstructionReader::new(file)
            .instructions()
            .into_diagnostic()?;
        for instruction in instructions {
            match instruction {
                Ok(instruction) => {
                    if let Err(e) = processor.process(instruction) {
                        eprintln!("Error processing payment: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error reading payment: {}", e);
                }
            }
        }
    } else {
        for instruction in demo_instructions() {
            processor.process(instruction).into_diagnostic()?;
        }
    }

    if cli.output == OutputFormat::Csv {
        let stdout = io::stdout();
        let mut writer = ReceiptWriter::new(stdout.lock());
        writer.write_receipts(collected.receipts()).into_diagnostic()?;
    }

    Ok(())
}
