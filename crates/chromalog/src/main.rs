use std::io::{
    self,
    BufRead,
};

use anyhow::{
    Context,
    Result,
};
use chromalog::{
    Logger,
    Severity,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chromalog")]
#[command(about = "Write leveled, colorized log lines using a YAML logger config")]
#[command(version)]
struct Cli {
    #[arg(
        short = 'c',
        long,
        help = "Config file name inside the config directory (default: config.yaml)",
        value_name = "FILE",
        default_value = ""
    )]
    config: String,

    #[arg(
        short = 'l',
        long,
        help = "Severity of the logged message (info, warning, error, danger; anything else logs at the default level)",
        value_name = "LEVEL",
        default_value = "info"
    )]
    level: String,

    #[arg(long, help = "Log each line read from stdin")]
    stdin: bool,

    #[arg(help = "Message to log", value_name = "MESSAGE")]
    message: Vec<String>,
}

impl Cli {
    fn validate(&self) -> Result<(), String> {
        if self.stdin && !self.message.is_empty() {
            return Err("--stdin cannot be combined with a MESSAGE argument".to_string());
        }
        if !self.stdin && self.message.is_empty() {
            return Err("a MESSAGE argument or --stdin is required".to_string());
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    cli.validate().map_err(anyhow::Error::msg)?;

    let logger = Logger::initialize(&cli.config).context("Failed to initialize logger")?;
    let severity = Severity::parse(&cli.level);

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            logger.log(severity, line);
        }
    } else {
        logger.log(severity, cli.message.join(" "));
    }

    logger.close();
    Ok(())
}
