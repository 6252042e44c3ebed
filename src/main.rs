//! CLI entry point for `zed2json`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use zed2json::mapper::schema_mapper;
use zed2json::output::formatter;
use zed2json::schema::core::CompiledSchema;

#[derive(Parser)]
#[command(
    name = "zed2json",
    about = "Translate compiled authorization schemas into a JSON document model"
)]
struct Cli {
    /// Compiled schema input file (JSON encoding of the compiled tree)
    input: PathBuf,

    /// Output file; prints to stdout when omitted
    output: Option<PathBuf>,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Stage 1: Read the compiled schema
    let content = match std::fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            process::exit(2);
        }
    };

    let schema: CompiledSchema = match serde_json::from_str(&content) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("Error parsing compiled schema: {e}");
            process::exit(2);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} definitions, {} caveats",
            schema.object_definitions.len(),
            schema.caveat_definitions.len()
        );
    }

    // Stage 2: Map to the output document
    let document = match schema_mapper::map_schema(&schema) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error mapping schema: {e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        for definition in &document.definitions {
            eprintln!(
                "Definition '{}': {} relations, {} permissions",
                definition.name,
                definition.relations.len(),
                definition.permissions.len()
            );
        }
    }

    // Stage 3: Render and write
    let rendered = match formatter::render_document(&document) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error rendering document: {e}");
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = formatter::write_output(path, &rendered) {
                eprintln!("Error writing output: {e}");
                process::exit(2);
            }
        }
        None => print!("{rendered}"),
    }
}
