mod config;
mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, bail};
use calculator::OverflowPolicy;
use calculator_sdk::Operation;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::AppConfig;

/// Calculator - integer addition and multiplication
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(about = "Calculator - integer addition and multiplication")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overflow policy override (overrides config)
    #[arg(long, value_enum, global = true)]
    overflow: Option<OverflowArg>,

    /// Print effective configuration (YAML) and exit
    #[arg(long, global = true)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers
    Add(Operands),
    /// Multiply two integers
    Multiply(Operands),
    /// Validate configuration and exit
    Check,
}

#[derive(Args)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    a: i64,
    #[arg(allow_negative_numbers = true)]
    b: i64,
}

#[derive(Clone, Copy, ValueEnum)]
enum OverflowArg {
    Checked,
    Wrapping,
    Saturating,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Checked => Self::Checked,
            OverflowArg::Wrapping => Self::Wrapping,
            OverflowArg::Saturating => Self::Saturating,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref()
        && !path.is_file()
    {
        bail!("config file does not exist: {}", path.display());
    }

    // defaults -> YAML -> env (APP__*) -> CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(overflow) = cli.overflow {
        config.calculator.overflow = overflow.into();
    }

    let mut stdout = std::io::stdout().lock();

    if cli.print_config {
        write!(stdout, "{}", serde_saphyr::to_string(&config)?)?;
        return Ok(());
    }

    logging::init_logging(&config.logging, cli.verbose)?;

    let Some(command) = cli.command else {
        bail!("no command given, see --help");
    };

    match command {
        Commands::Check => {
            tracing::info!(
                overflow = config.calculator.overflow.as_str(),
                "configuration is valid"
            );
            writeln!(stdout, "configuration OK")?;
        }
        Commands::Add(Operands { a, b }) => {
            let result = evaluate(&config, Operation::Add, a, b)?;
            writeln!(stdout, "{result}")?;
        }
        Commands::Multiply(Operands { a, b }) => {
            let result = evaluate(&config, Operation::Multiply, a, b)?;
            writeln!(stdout, "{result}")?;
        }
    }

    Ok(())
}

fn evaluate(config: &AppConfig, op: Operation, a: i64, b: i64) -> Result<i64> {
    let client = calculator::wire_client(&config.calculator);
    let result = match op {
        Operation::Add => client.add(a, b)?,
        Operation::Multiply => client.multiply(a, b)?,
    };
    tracing::info!(%op, a, b, result, "evaluated");
    Ok(result)
}
