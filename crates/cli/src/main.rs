//! Virtual memory translation simulator CLI.
//!
//! This binary runs a trace of logical addresses through the simulated MMU. It performs:
//! 1. **Setup:** Builds the configuration from defaults, an optional JSON file and flags.
//! 2. **Translation:** Maps the backing store and translates every address in the trace.
//! 3. **Report:** Prints page faults and TLB hits, optionally followed by per-address
//!    translations and a full statistics report.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vmsim_core::common::Result;
use vmsim_core::config::{Config, ReplacementStrategy};
use vmsim_core::memory::BackingStore;
use vmsim_core::sim::{TraceReader, Translator};
use vmsim_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "vm",
    author,
    version,
    about = "Demand-paged address translation simulator",
    long_about = "Translate a trace of logical addresses through a 16-entry TLB and a page table \
                  backed by a memory-mapped backing store, then report page faults and TLB hits.\n\n\
                  Examples:\n  vm BACKING_STORE.bin addresses.txt\n  vm BACKING_STORE.bin addresses.txt -p lru -n 128"
)]
struct Cli {
    /// Backing store file (one 256-byte page per logical page).
    backing_store: String,

    /// Trace file of whitespace-separated decimal logical addresses.
    trace: String,

    /// Replacement strategy for the TLB and page table: fifo or lru.
    #[arg(short = 'p', long = "policy")]
    policy: Option<String>,

    /// Number of physical frames.
    #[arg(short = 'n', long = "frames")]
    frames: Option<usize>,

    /// JSON configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<String>,

    /// Print every translation as it happens.
    #[arg(long)]
    show_translations: bool,

    /// Print the full statistics report after the summary.
    #[arg(long)]
    stats: bool,

    /// Print only these report sections (comma-separated: summary, tlb, page_table).
    /// Implies `--stats`.
    #[arg(long, value_delimiter = ',')]
    stats_sections: Vec<String>,

    /// Log page faults and evictions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merges the configuration layers: defaults, then the JSON file, then flags.
///
/// Validation happens once, when the translator is built.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(policy) = &cli.policy {
        config.policy = policy.parse::<ReplacementStrategy>()?;
    }
    if let Some(frames) = cli.frames {
        config.memory.physical_pages = frames;
    }
    tracing::debug!(?config, "configuration");
    Ok(config)
}

/// Runs the whole simulation; every error is fatal and reported by `main`.
fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let store = BackingStore::open(&cli.backing_store)?;
    let mut translator = Translator::new(&config, &store)?;
    let trace = TraceReader::open(&cli.trace)?;

    let stats = if cli.show_translations {
        translator.run_with(trace, |t| {
            println!(
                "Virtual address: {} Physical address: {} Value: {}",
                t.logical,
                t.physical,
                t.signed_value()
            );
        })
    } else {
        translator.run(trace)
    };

    println!("{}", stats.summary());
    if !cli.stats_sections.is_empty() {
        for section in &cli.stats_sections {
            if !STATS_SECTIONS.contains(&section.as_str()) {
                tracing::warn!(section = %section, "unknown stats section");
            }
        }
        stats.print_sections(&cli.stats_sections);
    } else if cli.stats {
        stats.print();
    }
    Ok(())
}
