mod scrape;
mod sql;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "talentdb")]
#[command(about = "Scrape influencer profiles and generate talents SQL")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the listing page and every linked profile into a CSV file
    Scrape {
        /// CSV file to write (defaults to `TALENTDB_CSV_PATH`)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print SQL that replaces the talents table with the rows of a CSV file
    Sql {
        /// CSV file to read (defaults to `TALENTDB_CSV_PATH`)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Insert layout
        #[arg(long, value_enum, default_value_t = ModeArg::Batch)]
        mode: ModeArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// A single multi-row INSERT
    Batch,
    /// One INSERT per row
    PerRow,
}

impl From<ModeArg> for talentdb_sql::SqlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Batch => talentdb_sql::SqlMode::Batch,
            ModeArg::PerRow => talentdb_sql::SqlMode::PerRow,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = talentdb_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scrape { output } => {
            let path = output.unwrap_or_else(|| config.csv_path.clone());
            scrape::run_scrape(&config, &path).await
        }
        Commands::Sql { input, mode } => {
            let path = input.unwrap_or_else(|| config.csv_path.clone());
            sql::run_sql(&config, &path, mode.into())
        }
    }
}
