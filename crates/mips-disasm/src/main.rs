use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use mips_disasm::{build_listing, load_words, output_path, scan_branches, BranchTargets, InputPathError, MalformedLine};
use mips_rs::disasm::label;

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble a MIPS .obj hex listing into assembly", long_about = None)]
struct Cli {
    /// Input listing: one 32-bit word per line as 8 hex digits
    #[arg(value_name = "INPUT.obj")]
    input: PathBuf,
    /// Write output here instead of INPUT.s
    #[arg(long, value_name = "FILE", conflicts_with = "stdout")]
    out: Option<PathBuf>,
    /// Print output instead of writing a file
    #[arg(long)]
    stdout: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Export branch-target labels to JSON (Vec<{ addr, name }>)
    #[arg(long, value_name = "FILE")]
    labels_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, serde::Serialize)]
struct LabelKV { addr: u32, name: String }

fn export_labels(path: &Path, targets: &BranchTargets) -> Result<()> {
    let arr: Vec<LabelKV> = targets
        .iter()
        .filter_map(|t| u32::try_from(t).ok())
        .map(|addr| LabelKV { addr, name: label(addr) })
        .collect();
    std::fs::write(path, serde_json::to_string_pretty(&arr)?)?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    // resolve the destination before touching the input
    let sibling = output_path(&cli.input)?;
    let dest = if cli.stdout { None } else { Some(cli.out.clone().unwrap_or(sibling)) };

    let words = load_words(&cli.input)?;
    let targets = scan_branches(&words);
    let listing = build_listing(&words, &targets);
    tracing::info!(
        words = words.len(),
        labels = listing.label_count(),
        invalid = listing.invalid_count(),
        "disassembled"
    );

    let body = match cli.format {
        OutputFormat::Text => listing.to_text(),
        OutputFormat::Json => listing.to_json()? + "\n",
    };
    match dest {
        Some(path) => {
            std::fs::write(&path, body)?;
            tracing::info!(path = %path.display(), "wrote listing");
        }
        None => print!("{body}"),
    }

    if let Some(path) = &cli.labels_out {
        export_labels(path, &targets)?;
    }
    Ok(())
}

/// Input-shape errors go to `out` verbatim; anything else to `diag`.
fn report<O: Write, E: Write>(err: &anyhow::Error, mut out: O, mut diag: E) -> std::io::Result<()> {
    if err.is::<MalformedLine>() || err.is::<InputPathError>() {
        writeln!(out, "{err}")
    } else {
        writeln!(diag, "Error: {err:#}")
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = report(&err, std::io::stdout().lock(), std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
