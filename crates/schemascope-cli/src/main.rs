//! schemascope CLI - schema summaries and ER diagrams from SQL DDL

mod args;
mod config;

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use schemascope_core::render::{write_dot, write_summary};
use schemascope_core::{extract_schema, Schema};

use crate::args::{Args, Command, OutputFormat};
use crate::config::Config;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Summary {
            files,
            schema_dir,
            config: config_path,
            format,
        } => {
            // Load configuration
            let config = if let Some(path) = config_path {
                // Load from specified path
                Config::from_file(&path)?
            } else {
                // Try to find schemascope.toml
                Config::find_and_load()?.unwrap_or_default()
            };

            // Merge CLI args with config (CLI takes precedence)
            let config = config.merge_with_args(&files, &schema_dir, &format);

            let ddl_files = collect_ddl_files(&config.schema, config.schema_dir.as_deref())?;
            let schema = load_schema(&ddl_files)?;

            let output_format = match config.format.as_deref() {
                Some("json") => OutputFormat::Json,
                _ => OutputFormat::Human,
            };
            match output_format {
                OutputFormat::Human => {
                    let stdout = std::io::stdout();
                    write_summary(&schema, &mut stdout.lock()).into_diagnostic()?;
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&schema).into_diagnostic()?;
                    println!("{}", json);
                }
            }

            Ok(())
        }

        Command::Diagram {
            files,
            schema_dir,
            output,
        } => {
            let patterns: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
            let dir = schema_dir.as_ref().map(|p| p.display().to_string());
            let ddl_files = collect_ddl_files(&patterns, dir.as_deref())?;
            let schema = load_schema(&ddl_files)?;

            match output {
                Some(path) => {
                    let mut file = fs::File::create(&path).into_diagnostic()?;
                    write_dot(&schema, &mut file).into_diagnostic()?;
                }
                None => {
                    let stdout = std::io::stdout();
                    write_dot(&schema, &mut stdout.lock()).into_diagnostic()?;
                }
            }

            Ok(())
        }

        Command::Export { files, output } => {
            // Raw byte passthrough; the exported file carries no schema
            // semantics.
            let patterns: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
            let ddl_files = collect_ddl_files(&patterns, None)?;

            let mut out = fs::File::create(&output).into_diagnostic()?;
            for file in &ddl_files {
                let bytes = fs::read(file).into_diagnostic()?;
                out.write_all(&bytes).into_diagnostic()?;
            }

            Ok(())
        }
    }
}

/// Expand file patterns and an optional schema directory into the list of
/// DDL files to read. Patterns containing `*` go through glob expansion.
fn collect_ddl_files(patterns: &[String], schema_dir: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut ddl_files = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') {
            for path in glob::glob(pattern).into_diagnostic()?.flatten() {
                ddl_files.push(path);
            }
        } else {
            ddl_files.push(PathBuf::from(pattern));
        }
    }

    if let Some(dir) = schema_dir {
        let pattern = format!("{}/**/*.sql", dir);
        for path in glob::glob(&pattern).into_diagnostic()?.flatten() {
            ddl_files.push(path);
        }
    }

    if ddl_files.is_empty() {
        miette::bail!(
            "No DDL files specified. Pass files, use --schema-dir, or configure schemascope.toml"
        );
    }

    Ok(ddl_files)
}

/// Read and extract every file, appending tables in file order.
fn load_schema(files: &[PathBuf]) -> Result<Schema> {
    let mut schema = Schema::new();
    for file in files {
        let content = fs::read_to_string(file).into_diagnostic()?;
        schema.merge(extract_schema(&content));
    }
    Ok(schema)
}
