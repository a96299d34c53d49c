//! Command-line interface for domschema

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use domschema::markup;
#[cfg(feature = "cli")]
use domschema::{SchemaNode, SchemaTag};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "domschema")]
#[command(author, version, about = "Structural validation of markup fragments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect a schema and display its structure
    Inspect {
        /// Path to the schema file
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Validate a markup fragment against a schema
    Validate {
        /// Path to the schema file
        #[arg(short, long, value_name = "SCHEMA")]
        schema: PathBuf,

        /// Path to the markup file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { schema, json } => cmd_inspect(schema, json),
        Commands::Validate { schema, file, json } => cmd_validate(schema, file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn cmd_inspect(schema_path: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let schema_markup = fs::read_to_string(&schema_path)?;
    let schema = markup::parse_schema(&schema_markup)?;

    if json_output {
        let json = serde_json::json!({
            "label": schema.label(),
            "matchers": count_nodes(schema.children()),
            "depth": tree_depth(schema.children()),
            "tree": schema.children().iter().map(schema_to_json).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("domschema v{}", domschema::VERSION);
        println!();
        println!("Schema Information:");
        println!("  Matchers: {}", count_nodes(schema.children()));
        println!("  Depth: {}", tree_depth(schema.children()));
        println!();
        println!("{}", schema.label());
        for child in schema.children() {
            print_schema_tree(child, 1);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn count_nodes(children: &[SchemaNode]) -> usize {
    children
        .iter()
        .map(|child| 1 + count_nodes(child.as_tag().children()))
        .sum()
}

#[cfg(feature = "cli")]
fn tree_depth(children: &[SchemaNode]) -> usize {
    children
        .iter()
        .map(|child| 1 + tree_depth(child.as_tag().children()))
        .max()
        .unwrap_or(0)
}

#[cfg(feature = "cli")]
fn print_schema_tree(node: &SchemaNode, indent: usize) {
    println!("{}{}", "  ".repeat(indent), node.label());
    for child in node.as_tag().children() {
        print_schema_tree(child, indent + 1);
    }
}

#[cfg(feature = "cli")]
fn schema_to_json(node: &SchemaNode) -> serde_json::Value {
    serde_json::json!({
        "label": node.label(),
        "kind": node.kind_name(),
        "attrs": node.as_tag().attrs(),
        "children": node.as_tag().children().iter().map(schema_to_json).collect::<Vec<_>>(),
    })
}

#[cfg(feature = "cli")]
fn cmd_validate(
    schema_path: PathBuf,
    file: PathBuf,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema_markup = fs::read_to_string(&schema_path)?;
    let schema = markup::parse_schema(&schema_markup)?;

    let fragment_markup = fs::read_to_string(&file)?;
    let fragment = markup::parse_fragment(&fragment_markup)?;

    match schema.validate_fragment(&fragment) {
        Ok(()) => {
            if json_output {
                let json = serde_json::json!({ "valid": true });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                println!("✓ Fragment is valid");
            }
            Ok(())
        }
        Err(failure) => {
            if json_output {
                let json = serde_json::json!({
                    "valid": false,
                    "failure": failure,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                println!("✗ Fragment is invalid");
                println!();
                println!("  {}", failure);
            }
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
