//! hql2yaml CLI - convert Hive schema dumps into YAML schema documents.
//!
//! Reads a line-oriented schema dump and writes `result.yaml` in the
//! current working directory.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Fixed output location, relative to the current working directory.
const OUTPUT_FILE: &str = "result.yaml";

#[derive(Parser)]
#[command(name = "hql2yaml")]
#[command(version, about = "Convert Hive schema dumps into YAML schema documents", long_about = None)]
struct Cli {
    /// Path to the Hive schema dump (one column declaration per line)
    schema_file: PathBuf,

    /// Schema name, copied verbatim into the output document
    schema_name: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
            e.exit()
        }
        Err(_) => {
            println!("Usage: hql2yaml <SCHEMA_FILE> <SCHEMA_NAME>");
            println!("  SCHEMA_FILE  path to a Hive schema dump, one column declaration per line");
            println!("  SCHEMA_NAME  name of the schema in the generated document");
            process::exit(1);
        }
    };

    if let Err(e) = convert(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the conversion and report progress
fn convert(cli: Cli) -> Result<(), String> {
    println!("🔧 Converting {}...", cli.schema_file.display());

    let document = hql2yaml::convert_to_file(&cli.schema_file, &cli.schema_name, OUTPUT_FILE)?;

    println!(
        "  ✓ Parsed {} fields into schema '{}'",
        document.field_count(),
        cli.schema_name
    );
    println!("  ✓ Wrote {}", OUTPUT_FILE);
    println!("✨ Conversion complete!");

    Ok(())
}
