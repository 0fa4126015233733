use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "campuswatch")]
#[command(
    author,
    version,
    about = "Preview category and urgency predictions for campus issue reports"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (YAML)
    #[arg(
        short,
        long,
        global = true,
        env = "CAMPUSWATCH_CONFIG",
        default_value = "campuswatch.yaml"
    )]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a description once and print the snapshot
    Classify {
        /// Description text (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Read successive field contents from stdin, one per line, and print
    /// each phase change of the debounced preview
    Live {
        /// Debounce delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Minimum trimmed length before analysis starts
        #[arg(long)]
        min_chars: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
