use anyhow::Result;
use clap::{Parser, Subcommand};
use printgrid_cli::commands;
use printgrid_core::constants::DEFAULT_MAX_COLUMNS;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "printgrid")]
#[command(about = "Printgrid - Checksummed base-32 sheets for paper backups", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file into a printable sheet
    Encode {
        /// Input file (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for the sheet (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Maximum number of data columns per row
        #[arg(long, default_value_t = DEFAULT_MAX_COLUMNS)]
        max_columns: usize,
    },

    /// Decode a transcribed sheet back into the original file
    Decode {
        /// Input sheet (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for the decoded bytes (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check every checksum of a sheet and report suspect cells
    Verify {
        /// Input sheet (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for sheets and decoded bytes
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            output,
            max_columns,
        } => commands::encode::execute(&input, output.as_deref(), max_columns),

        Commands::Decode { input, output } => commands::decode::execute(&input, output.as_deref()),

        Commands::Verify { input, json } => {
            let report = commands::verify::execute(&input, json)?;
            if !report.is_valid() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
