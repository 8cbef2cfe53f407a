mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::banks::BanksArgs;
use commands::run::RunArgs;
use commands::scenario::ScenarioArgs;

/// Bank capital stress testing with decimal precision
#[derive(Parser)]
#[command(
    name = "capstress",
    version,
    about = "Bank capital stress testing with decimal precision",
    long_about = "Simulates how bank regulatory capital evolves over a fixed \
                  forecast horizon under baseline and adverse macro scenarios: \
                  shock-and-decay scenario generation, linear satellite loss \
                  models, loss aggregation, and the CET1 roll-forward with \
                  trough and shortfall extraction."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full stress test (capital panel + trough summary)
    Run(RunArgs),
    /// Print the generated baseline and adverse macro paths
    Scenario(ScenarioArgs),
    /// Print bank starting positions (EAD, RWA, CET1, ratio)
    Banks(BanksArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Run(args) => commands::run::run_stress(args),
        Commands::Scenario(args) => commands::scenario::run_scenario(args),
        Commands::Banks(args) => commands::banks::run_banks(args),
        Commands::Version => {
            println!("capstress {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
