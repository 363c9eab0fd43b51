// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shapekit CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use shapekit::cli::{Reporter, Runner};
use shapekit::config::{OutputFormat, ReportConfig};

#[derive(Parser)]
#[command(name = "shapekit")]
#[command(about = "Shapekit - perimeter and area of shapes described in plain text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./shapekit.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Also print untruncated perimeter and area
    #[arg(long, global = true)]
    exact: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure a single description, e.g. "Circle Center 1 1 Radius 2"
    Describe {
        /// Shape description
        description: String,
    },

    /// Measure every description in a file, one per line
    Batch {
        /// Input file
        input: String,

        /// Stop at the first malformed line
        #[arg(long)]
        fail_fast: bool,
    },

    /// Print the canonical form of a description
    Canonical {
        /// Shape description
        description: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    shapekit::init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = ReportConfig::from_file(path)?;
            config.apply_env_overrides(|key| std::env::var(key).ok());
            config
        }
        None => ReportConfig::load()?,
    };
    if cli.json {
        config.format = OutputFormat::Json;
    }
    if cli.exact {
        config.show_exact = true;
    }
    if cli.no_color {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Commands::Describe { description } => {
            let runner = Runner::new(config);
            report_or_exit(runner.describe(description));
        }
        Commands::Canonical { description } => {
            let runner = Runner::new(config);
            report_or_exit(runner.canonical(description));
        }
        Commands::Batch { input, fail_fast } => {
            if *fail_fast {
                config.fail_fast = true;
            }
            batch_command(input, config)?;
        }
        Commands::Version => {
            println!("Shapekit v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn report_or_exit(result: Result<String>) {
    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            Reporter::report_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn batch_command(input: &str, config: ReportConfig) -> Result<()> {
    let report = Runner::new(config).batch_file(input)?;
    println!("{}", report.output);

    if !report.summary.all_parsed() {
        std::process::exit(1);
    }

    Ok(())
}
