//! CLI for maze generation

use std::{
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;

use amazeing::{output, AsciiPrinter, Config, MazeGenerator};

/// Generate a maze, print it and export it to a text file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Show the shortest entry-to-exit path in the rendering
    #[arg(short, long)]
    path: bool,

    /// Do not write the output file named in the configuration
    #[arg(long)]
    no_output: bool,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file. Use `-` for stdin.
    file: PathBuf,
}

/// Read configuration, generate the maze, print and export it
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Config::parse(&buf)?
    } else {
        Config::load(&args.file)?
    };

    let mut generator = MazeGenerator::new(config.clone());
    let maze = generator.generate()?;

    let mut printer = AsciiPrinter::new();
    if args.path {
        printer.toggle_path();
    }
    print!("{}", printer.render(&maze));

    if !args.no_output {
        output::write_output(&maze, &config)?;
    }
    Ok(())
}
