//! CLI tool for parsing slide markup.

use anyhow::{Context, Result};
use clap::Parser;
use slides_core::{load_markup, render, OutputFormat, RenderOptions, SlideParser, Theme};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

/// Turn line-oriented slide markup into slide documents or outlines.
#[derive(Parser, Debug)]
#[command(name = "slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input markup file(s); reads stdin when omitted or "-"
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Output format: json, outline, manifest or summary
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Deck theme recorded in manifests and outline headers
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// Deck name (default: input file stem)
    #[arg(short, long)]
    name: Option<String>,

    /// Start outline output with a deck header
    #[arg(long)]
    header: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let format = OutputFormat::from_name(&args.format)?;
    let parser = SlideParser::new();

    let inputs = if args.input.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.input.clone()
    };

    let failures = process_inputs(&inputs, |input_path| {
        process_input(input_path, &args, &parser, format)
    });

    for (input_path, e) in &failures {
        eprintln!("Error processing {}: {:#}", input_path.display(), e);
    }

    Ok(())
}

/// Run `step` on every input, collecting failures instead of stopping at the first one.
fn process_inputs<F>(inputs: &[PathBuf], mut step: F) -> Vec<(PathBuf, anyhow::Error)>
where
    F: FnMut(&Path) -> Result<()>,
{
    inputs
        .iter()
        .filter_map(|input_path| {
            step(input_path)
                .err()
                .map(|e| (input_path.clone(), e))
        })
        .collect()
}

/// Parse one input and print or write the rendered output.
fn process_input(
    input_path: &Path,
    args: &Args,
    parser: &SlideParser,
    format: OutputFormat,
) -> Result<()> {
    if is_stdin(input_path) {
        let output = process_stdin(args, parser, format)?;
        print!("{}", output);
        return Ok(());
    }

    if args.verbose {
        eprintln!("Processing: {}", input_path.display());
    }

    let output = process_file(input_path, args, parser, format)?;
    if args.print {
        print!("{}", output);
    } else {
        let output_path = get_output_path(input_path, args.output.as_ref(), format)?;
        write_output(&output_path, &output)?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Parse markup read from stdin.
fn process_stdin(args: &Args, parser: &SlideParser, format: OutputFormat) -> Result<String> {
    let markup =
        load_markup(io::stdin().lock(), args.max_bytes).context("Failed to read stdin")?;
    render_markup(&markup, args.name.clone(), args, parser, format)
}

/// Parse a single markup file.
fn process_file(
    input_path: &Path,
    args: &Args,
    parser: &SlideParser,
    format: OutputFormat,
) -> Result<String> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let markup = load_markup(BufReader::new(file), args.max_bytes)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let name = args.name.clone().or_else(|| {
        input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
    });

    render_markup(&markup, name, args, parser, format)
}

fn render_markup(
    markup: &str,
    name: Option<String>,
    args: &Args,
    parser: &SlideParser,
    format: OutputFormat,
) -> Result<String> {
    let document = parser.parse(markup);
    log::debug!("Parsed {} slides", document.len());

    if args.verbose {
        eprintln!("  Found {} slides", document.len());
    }

    let options = RenderOptions {
        name,
        theme: Theme::from_name(&args.theme),
        header: args.header,
    };

    Ok(render(&document, format, &options)?)
}

/// Determine the output path for a processed file.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
