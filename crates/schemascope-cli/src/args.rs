//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "schemascope")]
#[command(author, version, about = "Schema summaries and ER diagrams from SQL DDL")]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a textual summary of the extracted schema
    Summary {
        /// DDL files to read (supports glob patterns)
        files: Vec<PathBuf>,

        /// Directory containing DDL files
        #[arg(long = "schema-dir", value_name = "DIR")]
        schema_dir: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Emit a Graphviz DOT diagram of the extracted schema
    Diagram {
        /// DDL files to read (supports glob patterns)
        files: Vec<PathBuf>,

        /// Directory containing DDL files
        #[arg(long = "schema-dir", value_name = "DIR")]
        schema_dir: Option<PathBuf>,

        /// Write the diagram to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Concatenate the raw DDL and write it to a .sql file
    Export {
        /// DDL files to read (supports glob patterns)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Destination file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
