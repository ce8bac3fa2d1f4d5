//! Generates TypeScript ABI bindings for the launchpad contracts.
//!
//! Reads forge build artifacts relative to the current directory and writes
//! `abis/*.ts`. Targets whose artifacts are missing are reported and skipped.
//!
//! Run with: `cargo run -p generate-abis` from the contracts project root.

use abigen::{default_targets, Converter, GeneratorConfig};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generate_abis=info,abigen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    let config = GeneratorConfig::from_current_dir()?;
    info!(root = %config.project_root.display(), "Generating ABI bindings");

    let converter = Converter::new(config);
    let report = converter.generate_all(&default_targets());
    report.log_summary(&converter);

    // Missing artifacts are expected before the first build; only report them.
    for target in report.exhausted() {
        warn!(contract = %target.output_name, "Binding was not generated");
    }

    Ok(())
}
