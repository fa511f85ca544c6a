use clap::{Parser, Subcommand, ValueEnum};

use crate::core::export::ExportFormat;
use crate::core::ChoreFilter;

#[derive(Debug, Clone, Parser)]
#[command(name = "chorelist")]
#[command(about = "Track personal chores in a local JSON file")]
pub struct CliConfig {
    /// Directory holding chores.json
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Path to TOML configuration file (defaults to ./chorelist.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show chores with a summary line
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Add a pending chore
    Add {
        description: String,
        /// YYYY-MM-DD, `today` or `tomorrow`
        #[arg(long)]
        deadline: String,
    },
    /// Flip a chore between done and pending
    Toggle {
        description: String,
        #[arg(long)]
        deadline: String,
    },
    /// Change a chore's description and/or deadline
    Edit {
        description: String,
        #[arg(long)]
        deadline: String,
        #[arg(long)]
        new_description: Option<String>,
        #[arg(long)]
        new_deadline: Option<String>,
    },
    Delete {
        description: String,
        #[arg(long)]
        deadline: String,
    },
    /// Write chores as CSV or TSV
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Done,
    Pending,
}

impl From<FilterArg> for ChoreFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ChoreFilter::All,
            FilterArg::Done => ChoreFilter::Completed,
            FilterArg::Pending => ChoreFilter::Uncompleted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}
