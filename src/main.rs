use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use swar_stoi::{
    validate::{sweep_u32, SweepConfig},
    Strategy,
};
use tracing::{info, warn};

/// Parse unsigned decimal integers with std, checked scalar or SWAR code.
#[derive(Parser)]
#[command(name = "swar-stoi")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse each argument and print the value or the error
    Parse {
        /// Decimal strings to parse
        #[arg(required = true)]
        inputs: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = StrategyArg::Predictable)]
        strategy: StrategyArg,

        #[arg(short, long, value_enum, default_value_t = Width::U32)]
        width: Width,
    },

    /// Round-trip every value of the u32 range through a strategy
    Validate {
        /// Strategy to check (all of them when omitted)
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Check every N-th value
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        stride: u32,

        /// Mismatches to print per strategy
        #[arg(long, default_value_t = 16)]
        samples: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Std,
    Predictable,
    Swar,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Std => Strategy::Std,
            StrategyArg::Predictable => Strategy::Predictable,
            StrategyArg::Swar => Strategy::Swar,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Width {
    U32,
    U64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            inputs,
            strategy,
            width,
        } => parse(&inputs, strategy.into(), width),
        Commands::Validate {
            strategy,
            stride,
            samples,
        } => {
            let strategies = match strategy {
                Some(strategy) => vec![strategy.into()],
                None => Strategy::ALL.to_vec(),
            };
            validate(
                &strategies,
                &SweepConfig {
                    stride,
                    sample_limit: samples,
                },
            )
        }
    }
}

fn parse(inputs: &[String], strategy: Strategy, width: Width) -> Result<()> {
    if strategy == Strategy::Swar {
        warn!("swar does not validate its input; non-digit or oversized values are meaningless");
    }

    let mut failures = 0;
    for input in inputs {
        let bytes = input.as_bytes();
        let result = match width {
            Width::U32 => strategy.parse_u32(bytes).map(u64::from),
            Width::U64 => strategy.parse_u64(bytes),
        };

        match result {
            Ok(value) => println!("{input} -> {value}"),
            Err(err) => {
                failures += 1;
                println!("{input} -> error: {err}");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} inputs failed to parse", inputs.len());
    }
    Ok(())
}

fn validate(strategies: &[Strategy], config: &SweepConfig) -> Result<()> {
    let mut failed = Vec::new();

    for &strategy in strategies {
        let start = Instant::now();
        let report = sweep_u32(strategy, config);
        let took = start.elapsed();

        if report.is_clean() {
            println!(
                "Validated {strategy} across 0...{} ({} values, stride {})",
                u32::MAX,
                report.checked,
                config.stride
            );
        } else {
            println!(
                "{strategy}: {} of {} values did not round-trip",
                report.mismatched, report.checked
            );
            for mismatch in &report.samples {
                println!("  {} -> {:?}", mismatch.expected, mismatch.actual);
            }
            failed.push(strategy.name());
        }
        info!(%strategy, ?took, "sweep done");
        println!("Took: {took:?}");
    }

    if !failed.is_empty() {
        bail!("validation failed for: {}", failed.join(", "));
    }
    Ok(())
}
