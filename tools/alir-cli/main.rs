use alir::prelude::*;
use clap::Parser;
use std::fs;
use std::io::Read;

/// A workflow-text to flowchart diagram generation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a workflow text file; stdin is read when omitted
    input_path: Option<String>,

    /// Treat the input as a diagram JSON payload and canonicalize it
    /// instead of generating from text
    #[arg(short, long)]
    canonicalize: bool,

    /// Pretty-print the diagram JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    let input = match &cli.input_path {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read input file '{}': {}", path, e))
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
            buffer
        }
    };

    let generator = Generator::new();

    let diagram = if cli.canonicalize {
        let raw: serde_json::Value = serde_json::from_str(&input)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse diagram JSON: {}", e)));
        generator.canonicalize(&raw)
    } else {
        generator
            .generate_from_text(&input)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()))
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&diagram)
    } else {
        serde_json::to_string(&diagram)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize diagram: {}", e)));

    println!("{}", json);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
