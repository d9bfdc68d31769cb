use crate::config::ViewMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "diffbro",
    about = "Compare two pieces of text side by side",
    version
)]
pub struct Cli {
    /// Original text file
    pub old: Option<PathBuf>,

    /// Modified text file
    pub new: Option<PathBuf>,

    /// Print the comparison to stdout instead of opening the viewer
    #[arg(short, long)]
    pub print: bool,

    /// Output format for printed comparisons
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Only print the summary counts
    #[arg(long)]
    pub stats_only: bool,

    /// Disable character-level highlighting of modified lines
    #[arg(long)]
    pub no_char_diff: bool,

    /// Initial view (overrides the config file)
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Path to a config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Whether to run without the interactive viewer
    pub fn is_batch(&self) -> bool {
        self.print || self.stats_only || self.format == OutputFormat::Json
    }
}
