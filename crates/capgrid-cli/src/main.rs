use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "capgrid",
    about = "capgrid: capacity analytics for the planning dashboard",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full analytics pass over a JSON input table
    Snapshot {
        /// Input tables (regions, contributors, features, entities, alerts)
        #[arg(short, long)]
        input: String,
        /// capgrid.toml; defaults apply when omitted
        #[arg(short, long)]
        config: Option<String>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Day the trailing window ends on (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
    },
    /// Emit a synthetic forecast series with confidence bands as JSON
    Series {
        #[arg(short, long, default_value_t = 365)]
        days: i64,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// First day of the series (default: one year before today)
        #[arg(short, long)]
        anchor: Option<String>,
    },
    /// Classify a single compute/storage load
    Classify {
        compute: f64,
        storage: f64,
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Generate a capgrid.toml scaffold
    Init {
        #[arg(short, long, default_value = "capgrid.toml")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("capgrid=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot { input, config, format, today } => {
            commands::dashboard::snapshot(&input, config.as_deref(), &format, today.as_deref())
        }
        Commands::Series { days, seed, anchor } => {
            commands::series::series(days, seed, anchor.as_deref())
        }
        Commands::Classify { compute, storage, config } => {
            commands::dashboard::classify(compute, storage, config.as_deref())
        }
        Commands::Init { path } => commands::config::init(&path),
    }
}
