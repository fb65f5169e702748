// lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use qtree::QTree;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Subcommands,

    /// Overwrite output files that already exist
    #[arg(short, long, global = true)]
    force: bool,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Compress a raw grayscale image into a quadtree file
    Compress(CompressArgs),

    /// Rebuild a raw grayscale image from a quadtree file
    Uncompress(UncompressArgs),
}

#[derive(Debug, Args)]
struct CompressArgs {
    /// Raw image, one value (0-255) per line
    input: PathBuf,
    /// Compressed output file
    output: PathBuf,
}

#[derive(Debug, Args)]
struct UncompressArgs {
    /// Compressed image file
    input: PathBuf,
    /// Raw output file, prints the tree when omitted
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let args = Cli::parse();
    match args.command {
        Subcommands::Compress(a) => compress(&a, args.force),
        Subcommands::Uncompress(a) => uncompress(&a, args.force),
    }
}

fn compress(args: &CompressArgs, force: bool) -> Result<()> {
    check_output(&args.output, force)?;

    let mut tree = QTree::new();
    tree.compress(&args.input)
        .with_context(|| format!("Failed to compress {:?}", args.input))?;
    tree.write(&args.output)
        .with_context(|| format!("Failed to write {:?}", args.output))?;
    info!(output = ?args.output, "wrote compressed image");

    print!("{}", report::Report::new(&tree));
    Ok(())
}

fn uncompress(args: &UncompressArgs, force: bool) -> Result<()> {
    if let Some(output) = &args.output {
        check_output(output, force)?;
    }

    let mut tree = QTree::new();
    tree.uncompress(&args.input)
        .with_context(|| format!("Failed to uncompress {:?}", args.input))?;

    match &args.output {
        Some(output) => {
            tree.write_raw(output)
                .with_context(|| format!("Failed to write {output:?}"))?;
            info!(?output, "wrote raw image");
            print!("{}", report::Report::new(&tree));
        }
        None => println!("{tree}"),
    }
    Ok(())
}

fn check_output(output: &Path, force: bool) -> Result<()> {
    if !force && output.try_exists()? {
        bail!("Output file {output:?} already exists, pass --force to overwrite it");
    }
    Ok(())
}
